//! The command surface of the assistant.
//!
//! Input lines are parsed into a [`Command`] plus arguments, executed by
//! the handlers, and answered with a [`Reply`] that the driver prints.

mod handlers;
mod parser;

pub use handlers::{
    add_birthday, add_contact, birthdays, change_phone, delete_contact, delete_phone, execute,
    show_all, show_birthday, show_phone, BirthdayWindow,
};
pub use parser::{parse_input, Command, Input};

use crate::domain::ValidationError;
use crate::error::BookError;
use crate::render::Table;
use std::fmt;
use thiserror::Error;

/// Why a command could not be carried out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Bad arguments or malformed values
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact (or phone) does not exist
    #[error("Record not found")]
    NotFound(String),

    /// The command token is not recognised
    #[error("Invalid command.")]
    InvalidCommand(String),

    /// Anything else
    #[error("Error: {0}")]
    Internal(String),
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(name) => Self::NotFound(name),
            BookError::Validation(e) => Self::Validation(e),
        }
    }
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// What the driver should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A one-line message
    Text(String),
    /// A rendered listing
    Table(Table),
    /// The command failed; the error text is shown to the user
    Failure(CommandError),
    /// The session should save and end
    Exit,
}

impl Reply {
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text(message.into())
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(message) => f.write_str(message),
            Self::Table(table) => write!(f, "{}", table),
            Self::Failure(err) => write!(f, "{}", err),
            Self::Exit => f.write_str("Good bye!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        let reply = Reply::Failure(CommandError::NotFound("Ghost".to_string()));
        assert_eq!(reply.to_string(), "Record not found");

        let reply = Reply::Failure(ValidationError::InvalidPhone("1".to_string()).into());
        assert_eq!(reply.to_string(), "Incorrect phone number");

        let reply = Reply::Failure(CommandError::Internal("disk full".to_string()));
        assert_eq!(reply.to_string(), "Error: disk full");
    }

    #[test]
    fn test_book_error_conversion() {
        let err = CommandError::from(BookError::NotFound("Ghost".to_string()));
        assert_eq!(err, CommandError::NotFound("Ghost".to_string()));
    }

    #[test]
    fn test_exit_reply() {
        assert!(Reply::Exit.is_exit());
        assert_eq!(Reply::Exit.to_string(), "Good bye!");
        assert!(!Reply::text("hi").is_exit());
    }
}
