//! Record model representing one contact in the address book.

use crate::domain::{BirthdayDate, Name, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of [`Record::add_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneAdded {
    /// The phone was appended
    Added,
    /// An equal phone is already stored; nothing changed
    AlreadyExists,
}

/// Outcome of [`Record::edit_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The old phone was replaced
    Changed,
    /// The old phone is not in this record; nothing changed
    NotFound,
}

/// A contact: a name, its phone numbers, and an optional birthday.
///
/// Phones keep insertion order and never contain duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RecordData")]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

/// Wire shape of a record; duplicates are dropped on the way in.
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        let mut record = Record {
            name: data.name,
            phones: Vec::with_capacity(data.phones.len()),
            birthday: data.birthday,
        };
        for phone in data.phones {
            if !record.phones.contains(&phone) {
                record.phones.push(phone);
            }
        }
        record
    }
}

impl Record {
    /// Create a record, optionally with a first phone number.
    ///
    /// # Errors
    ///
    /// Fails if the name is blank or the phone is not ten digits.
    pub fn new(name: &str, phone: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let phones = match phone {
            Some(phone) => vec![PhoneNumber::new(phone)?],
            None => Vec::new(),
        };

        Ok(Self {
            name,
            phones,
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Append a phone unless an equal one is already recorded.
    pub fn add_phone(&mut self, phone: &str) -> Result<PhoneAdded, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        if self.phones.contains(&phone) {
            return Ok(PhoneAdded::AlreadyExists);
        }
        self.phones.push(phone);
        Ok(PhoneAdded::Added)
    }

    /// Remove a phone by value. Unknown numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// `new` is validated before anything is touched. When `new` is
    /// already stored elsewhere in the record, `old` is simply dropped.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<PhoneEdit, ValidationError> {
        let new = PhoneNumber::new(new)?;
        let Some(index) = self.position(old) else {
            return Ok(PhoneEdit::NotFound);
        };

        if self.phones.iter().enumerate().any(|(i, p)| i != index && *p == new) {
            self.phones.remove(index);
        } else {
            self.phones[index] = new;
        }
        Ok(PhoneEdit::Changed)
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(BirthdayDate::parse(birthday)?);
        Ok(())
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
