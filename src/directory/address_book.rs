//! The address book: records keyed by contact name.

use crate::domain::Name;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A name-keyed collection of records that remembers insertion order.
///
/// Adding a record under a name that is already present replaces the old
/// record wholesale (its phones are not merged) but keeps its position in
/// the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<Name, Record>,
    order: Vec<Name>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add(&mut self, record: Record) {
        let name = record.name().clone();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!(name = %name, "Replaced existing record");
        } else {
            tracing::debug!(name = %name, "Added record");
            self.order.push(name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        self.order.retain(|n| n.as_str() != name);
        tracing::debug!(name = %name, "Deleted record");
        Ok(record)
    }

    /// Iterate over all records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// On-disk shape of the whole book.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    contacts: Vec<Record>,
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SnapshotRef {
            contacts: self.records().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = Snapshot::deserialize(deserializer)?;
        Ok(snapshot.contacts.into_iter().collect())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add(record);
        }
        book
    }
}
