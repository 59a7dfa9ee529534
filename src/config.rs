//! Configuration management for the address book assistant.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::directory::DEFAULT_LOOKAHEAD_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the saved address book.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Longest accepted birthday lookahead.
pub const MAX_LOOKAHEAD_DAYS: u32 = 366;

/// Configuration for the address book assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the address book is loaded from and saved to
    pub book_path: PathBuf,

    /// Days ahead covered by the `birthdays` report (default: 7)
    pub lookahead_days: u32,

    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: snapshot file (default: `addressbook.json`)
    /// - `BIRTHDAY_LOOKAHEAD_DAYS`: report window in days, 0-366 (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let lookahead_days = Self::parse_env_u32("BIRTHDAY_LOOKAHEAD_DAYS", DEFAULT_LOOKAHEAD_DAYS)?;
        if lookahead_days > MAX_LOOKAHEAD_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_LOOKAHEAD_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_LOOKAHEAD_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            lookahead_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
