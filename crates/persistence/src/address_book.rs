// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::json::{read_json_file, save_json_file};
use hirehive::AddressBookStorage;
use hirehive_domain::{AddressBook, Person};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializable representation of an `AddressBook`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBookData {
    #[serde(default)]
    pub persons: Vec<Person>,
}

impl AddressBookData {
    /// Converts into an address book, rejecting duplicate records.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidData` if two records are identical.
    pub fn into_address_book(self) -> Result<AddressBook, PersistenceError> {
        Ok(AddressBook::from_persons(self.persons)?)
    }
}

impl From<&AddressBook> for AddressBookData {
    fn from(address_book: &AddressBook) -> Self {
        Self {
            persons: address_book.persons().to_vec(),
        }
    }
}

/// Stores the address book as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the address book.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds values that fail validation.
    pub fn read_address_book(&self) -> Result<Option<AddressBook>, PersistenceError> {
        read_json_file::<AddressBookData>(&self.path)?
            .map(AddressBookData::into_address_book)
            .transpose()
    }

    /// Writes the address book, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_address_book(&self, address_book: &AddressBook) -> Result<(), PersistenceError> {
        save_json_file(&self.path, &AddressBookData::from(address_book))?;
        info!(
            path = %self.path.display(),
            persons = address_book.len(),
            "Saved address book"
        );
        Ok(())
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    type Error = PersistenceError;

    fn save_address_book(&self, address_book: &AddressBook) -> Result<(), Self::Error> {
        self.write_address_book(address_book)
    }
}
