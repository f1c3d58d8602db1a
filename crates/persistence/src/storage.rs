// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::address_book::JsonAddressBookStorage;
use crate::error::PersistenceError;
use crate::prefs::{UserPrefs, save_user_prefs};
use hirehive::{AddressBookStorage, messages};
use hirehive_domain::{AddressBook, sample_address_book};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How the address book was obtained at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The data file held at least one person.
    Loaded,
    /// The data file was read but holds nobody.
    Empty,
    /// No data file exists; sample persons were loaded.
    SampleMissing,
    /// The data file could not be read; sample persons were loaded.
    SampleUnreadable,
}

impl LoadStatus {
    /// Returns the message shown to the user after start-up.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Loaded => messages::MESSAGE_LOAD_SUCCESS,
            Self::Empty => messages::MESSAGE_EMPTY_ADDRESS_BOOK,
            Self::SampleMissing => messages::MESSAGE_SAMPLE_ADDRESS_BOOK,
            Self::SampleUnreadable => messages::MESSAGE_UNREADABLE_ADDRESS_BOOK,
        }
    }
}

/// Couples the address book file with the preferences file.
#[derive(Debug, Clone)]
pub struct StorageManager {
    address_book: JsonAddressBookStorage,
    user_prefs_path: PathBuf,
}

impl StorageManager {
    #[must_use]
    pub const fn new(address_book: JsonAddressBookStorage, user_prefs_path: PathBuf) -> Self {
        Self {
            address_book,
            user_prefs_path,
        }
    }

    #[must_use]
    pub fn address_book_path(&self) -> &Path {
        self.address_book.path()
    }

    /// Loads the address book, falling back to the sample persons.
    ///
    /// Never fails: a missing or unreadable file yields the sample address
    /// book and a status saying so.
    #[must_use]
    pub fn load_address_book(&self) -> (AddressBook, LoadStatus) {
        match self.address_book.read_address_book() {
            Ok(Some(address_book)) if address_book.is_empty() => {
                info!(path = %self.address_book_path().display(), "Address book is empty");
                (address_book, LoadStatus::Empty)
            }
            Ok(Some(address_book)) => {
                info!(
                    path = %self.address_book_path().display(),
                    persons = address_book.len(),
                    "Loaded address book"
                );
                (address_book, LoadStatus::Loaded)
            }
            Ok(None) => {
                info!(path = %self.address_book_path().display(), "Data file not found, using sample data");
                (sample_or_empty(), LoadStatus::SampleMissing)
            }
            Err(e) => {
                warn!(
                    path = %self.address_book_path().display(),
                    error = %e,
                    "Data file unreadable, using sample data"
                );
                (sample_or_empty(), LoadStatus::SampleUnreadable)
            }
        }
    }

    /// Writes the preferences file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_user_prefs(&self, prefs: &UserPrefs) -> Result<(), PersistenceError> {
        save_user_prefs(&self.user_prefs_path, prefs)
    }
}

impl AddressBookStorage for StorageManager {
    type Error = PersistenceError;

    fn save_address_book(&self, address_book: &AddressBook) -> Result<(), Self::Error> {
        self.address_book.save_address_book(address_book)
    }
}

fn sample_or_empty() -> AddressBook {
    sample_address_book().unwrap_or_else(|e| {
        warn!(error = %e, "Sample data is invalid, starting empty");
        AddressBook::new()
    })
}
