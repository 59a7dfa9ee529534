//! Address Book - a command-line assistant for a personal contact directory.
//!
//! The library stores contacts with their phone numbers and birthdays and
//! reports whose birthday should be celebrated in the coming week, with
//! weekend dates moved to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `PhoneNumber`, `BirthdayDate`)
//! - **models**: The `Record` entity for one contact
//! - **directory**: The `AddressBook` collection and the birthday report
//! - **commands**: Parsing and handling of user commands
//! - **render**: Text tables for console output
//! - **storage**: Loading and saving the address book
//! - **app**: The interactive read-eval loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod app;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod render;
pub mod storage;

pub use app::Assistant;
pub use commands::{Command, CommandError, Reply};
pub use config::Config;
pub use directory::{AddressBook, UpcomingBirthday};
pub use domain::{BirthdayDate, Name, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{PhoneAdded, PhoneEdit, Record};
pub use render::Table;
pub use storage::{BookStore, JsonFileStore};
