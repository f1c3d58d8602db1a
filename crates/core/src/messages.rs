// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User-facing feedback text.

use hirehive_domain::Person;

pub const MESSAGE_DATA_SAVED: &str = "\nData saved.";
pub const MESSAGE_LOAD_SUCCESS: &str = "Data file loaded successfully.";
pub const MESSAGE_EMPTY_ADDRESS_BOOK: &str =
    "The data file holds no contacts yet. Use add to create one.";
pub const MESSAGE_SAMPLE_ADDRESS_BOOK: &str =
    "No data file found. Loaded sample contacts; they are saved on the first change.";
pub const MESSAGE_UNREADABLE_ADDRESS_BOOK: &str =
    "The data file could not be read. Loaded sample contacts; the first change overwrites the file.";
pub const MESSAGE_SHOWING_HELP: &str = "Opened help window.";
pub const MESSAGE_EXIT: &str = "Exiting HireHive as requested ...";
pub const MESSAGE_LIST_ALL: &str = "Listed all persons";
pub const MESSAGE_CLEAR: &str = "Address book has been cleared!";

#[must_use]
pub fn added(person: &Person) -> String {
    format!("New person added: {person}")
}

#[must_use]
pub fn edited(person: &Person) -> String {
    format!("Edited Person: {person}")
}

#[must_use]
pub fn deleted(person: &Person) -> String {
    format!("Deleted Person: {person}")
}

#[must_use]
pub fn tagged(person: &Person) -> String {
    format!("Tagged {} as {}", person.name(), person.tag())
}

#[must_use]
pub fn scheduled(person: &Person) -> String {
    format!("Added interview date: {person}")
}

#[must_use]
pub fn showing_note(person: &Person) -> String {
    format!("Showing note of {}", person.name())
}

#[must_use]
pub fn persons_listed(count: usize) -> String {
    format!("{count} persons listed!")
}

#[must_use]
pub fn persons_listed_matching(count: usize, description: &str) -> String {
    format!("{count} persons listed with {description}!")
}

#[must_use]
pub fn undone(command_text: &str) -> String {
    format!("Undid: {command_text}")
}
