//! Tests for the JSON file store.

use address_book::{AddressBook, BookStore, JsonFileStore, Record, StorageError};
use std::fs;
use tempfile::TempDir;

fn sample_book() -> AddressBook {
    let mut alice = Record::new("Alice", Some("1234567890")).unwrap();
    alice.add_phone("0987654321").unwrap();
    alice.set_birthday("15.06.1990").unwrap();

    let bob = Record::new("Bob", None).unwrap();

    [alice, bob].into_iter().collect()
}

#[test]
fn test_missing_file_loads_empty_book() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));

    let book = store.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    let book = sample_book();

    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, book);
    let names: Vec<&str> = loaded.records().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(
        loaded.find("Alice").unwrap().to_string(),
        "Contact name: Alice, phones: 1234567890; 0987654321"
    );
}

#[test]
fn test_snapshot_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    JsonFileStore::new(&path).save(&sample_book()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "contacts": [
                {"name": "Alice", "phones": ["1234567890", "0987654321"], "birthday": "15.06.1990"},
                {"name": "Bob", "phones": [], "birthday": null}
            ]
        })
    );
}

#[test]
fn test_save_creates_parent_directories_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("book.json");
    let store = JsonFileStore::new(&path);

    store.save(&sample_book()).unwrap();

    assert!(path.exists());
    let entries: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("book.json")]);
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));

    store.save(&sample_book()).unwrap();
    store.save(&AddressBook::new()).unwrap();

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, "{ not json").unwrap();

    let result = JsonFileStore::new(&path).load();
    assert!(matches!(result, Err(StorageError::Json(_))));
}

#[test]
fn test_invalid_values_in_file_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(
        &path,
        r#"{"contacts":[{"name":"Alice","phones":[],"birthday":"1990-06-15"}]}"#,
    )
    .unwrap();

    assert!(JsonFileStore::new(&path).load().is_err());
}
