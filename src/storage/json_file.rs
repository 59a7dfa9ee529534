//! JSON file backed store.

use super::BookStore;
use crate::directory::AddressBook;
use crate::error::StorageResult;
use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Stores the address book as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // The previous snapshot stays intact until the rename.
        let temp = self.temp_path();
        {
            let mut writer = BufWriter::new(fs::File::create(&temp)?);
            serde_json::to_writer_pretty(&mut writer, book)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        fs::rename(&temp, &self.path)?;

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
