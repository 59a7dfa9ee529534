//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual date format.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields, so the shape is checked first.
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date shape regex")
});

/// A birthday, stored as a calendar date and written as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use address_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::parse("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// assert!(BirthdayDate::parse("1990-06-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not
    /// zero-padded `DD.MM.YYYY` or does not name a real calendar date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The same month and day in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years. Returns
    /// `None` only when `year` is outside chrono's supported range.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl From<NaiveDate> for BirthdayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize in the display format
impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
