//! The contact directory and its birthday query.

mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{UpcomingBirthday, DEFAULT_LOOKAHEAD_DAYS};
