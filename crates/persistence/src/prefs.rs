// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application configuration and user preferences.
//!
//! Both live in JSON files. A missing file yields the defaults, which are
//! written back so the user has a file to edit.

use crate::error::PersistenceError;
use crate::json::{read_json_file, save_json_file};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_PREFS_FILE: &str = "preferences.json";
pub const DEFAULT_ADDRESS_BOOK_FILE: &str = "data/addressbook.json";
pub const DEFAULT_LIST_WIDTH: usize = 100;

/// Application settings read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Where user preferences are kept.
    pub user_prefs_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            user_prefs_file_path: PathBuf::from(DEFAULT_PREFS_FILE),
        }
    }
}

/// Preferences the user may change between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    /// The address book data file.
    pub address_book_file_path: PathBuf,
    /// Column width the person list wraps to.
    pub list_width: usize,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE),
            list_width: DEFAULT_LIST_WIDTH,
        }
    }
}

/// Reads the config file, falling back to defaults.
///
/// An unreadable file is logged and replaced by the defaults in memory only,
/// so a typo never destroys the user's settings.
///
/// # Errors
///
/// Returns an error only if the defaults cannot be written for a missing file.
pub fn load_config(path: &Path) -> Result<Config, PersistenceError> {
    load_or_init(path, "config")
}

/// Reads the preferences file, falling back to defaults.
///
/// # Errors
///
/// Returns an error only if the defaults cannot be written for a missing file.
pub fn load_user_prefs(path: &Path) -> Result<UserPrefs, PersistenceError> {
    load_or_init(path, "preferences")
}

/// Writes the preferences file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_user_prefs(path: &Path, prefs: &UserPrefs) -> Result<(), PersistenceError> {
    save_json_file(path, prefs)
}

fn load_or_init<T>(path: &Path, kind: &str) -> Result<T, PersistenceError>
where
    T: Default + Serialize + serde::de::DeserializeOwned,
{
    match read_json_file::<T>(path) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => {
            info!(path = %path.display(), kind, "Creating file with default values");
            let value: T = T::default();
            save_json_file(path, &value)?;
            Ok(value)
        }
        Err(e) => {
            warn!(path = %path.display(), kind, error = %e, "Using default values");
            Ok(T::default())
        }
    }
}
