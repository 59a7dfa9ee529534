use address_book::error::{StorageError, StorageResult};
use address_book::{AddressBook, BookStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book store for testing.
///
/// Keeps the snapshot in memory, can be told to fail, and tracks method
/// calls for verification. Clones share state, so a test can keep one
/// handle while the session owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStore {
    snapshot: Arc<Mutex<Option<AddressBook>>>,
    fail_save: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookStore {
    /// Create a new empty MockBookStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.snapshot.lock().unwrap() = Some(book);
        store
    }

    /// Make subsequent saves fail.
    pub fn fail_saves(&self) {
        *self.fail_save.lock().unwrap() = true;
    }

    /// The last saved snapshot, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookStore for MockBookStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.increment_call_count("load");
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.increment_call_count("save");
        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock save failure",
            )));
        }
        *self.snapshot.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
