//! Data models for the address book.

pub mod record;

pub use record::{PhoneAdded, PhoneEdit, Record};
