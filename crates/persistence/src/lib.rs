// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File storage for HireHive.
//!
//! The address book, the user preferences and the application config are each
//! one JSON file. Every save rewrites the whole file. Dates are stored as
//! `DD/MM/YYYY` strings and every field is validated again on load, so a
//! hand-edited file cannot introduce values the commands would reject.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod address_book;
mod error;
mod json;
mod prefs;
mod storage;

#[cfg(test)]
mod tests;

pub use address_book::{AddressBookData, JsonAddressBookStorage};
pub use error::PersistenceError;
pub use json::{read_json_file, save_json_file};
pub use prefs::{
    Config, DEFAULT_ADDRESS_BOOK_FILE, DEFAULT_CONFIG_FILE, DEFAULT_LIST_WIDTH, DEFAULT_PREFS_FILE,
    UserPrefs, load_config, load_user_prefs, save_user_prefs,
};
pub use storage::{LoadStatus, StorageManager};
