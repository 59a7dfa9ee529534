//! Persistence of the address book between sessions.
//!
//! The whole book is loaded once at startup and written back once on
//! exit. [`BookStore`] abstracts over where it lives so the session can be
//! exercised against an in-memory store.

mod json_file;

pub use json_file::JsonFileStore;

use crate::directory::AddressBook;
use crate::error::StorageResult;

/// Loads and saves a complete address book snapshot.
pub trait BookStore {
    /// Load the saved book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
