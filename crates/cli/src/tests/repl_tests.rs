// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::repl::{Outcome, Screen, handle_line};
use crate::tests::{NullStorage, create_test_person};
use hirehive::{FixedClock, Logic, Model, messages};
use hirehive_domain::AddressBook;
use std::path::PathBuf;
use time::macros::date;

fn create_test_logic() -> Logic<NullStorage, FixedClock> {
    let address_book: AddressBook = AddressBook::from_persons(vec![
        create_test_person("Alex Yeoh"),
        create_test_person("Bernice Yu"),
    ])
    .unwrap();
    Logic::new(
        Model::with_address_book(address_book),
        NullStorage,
        FixedClock(date!(2025 - 01 - 06)),
    )
}

fn create_test_screen() -> Screen {
    Screen {
        list_width: 80,
        data_path: PathBuf::from("data/addressbook.json"),
    }
}

#[test]
fn test_change_reports_save_and_shows_list() {
    let mut logic: Logic<NullStorage, FixedClock> = create_test_logic();

    let outcome: Outcome = handle_line(&mut logic, "delete n/Alex Yeoh", &create_test_screen());

    assert!(!outcome.exit);
    assert!(outcome.output.starts_with("Deleted Person: Alex Yeoh"));
    assert!(outcome.output.contains(messages::MESSAGE_DATA_SAVED));
    assert!(outcome.output.contains("1. Bernice Yu [Applicant]"));
    assert!(outcome.output.ends_with("[1 of 1 persons shown | data/addressbook.json]"));
}

#[test]
fn test_find_shows_filtered_list() {
    let mut logic: Logic<NullStorage, FixedClock> = create_test_logic();

    let outcome: Outcome = handle_line(&mut logic, "find yu", &create_test_screen());

    assert!(outcome.output.starts_with("1 persons listed!"));
    assert!(!outcome.output.contains(messages::MESSAGE_DATA_SAVED));
    assert!(!outcome.output.contains("Alex Yeoh"));
    assert!(outcome.output.ends_with("[1 of 2 persons shown | data/addressbook.json]"));
}

#[test]
fn test_error_is_printed_and_loop_continues() {
    let mut logic: Logic<NullStorage, FixedClock> = create_test_logic();

    let outcome: Outcome = handle_line(&mut logic, "delete n/Nobody", &create_test_screen());

    assert!(!outcome.exit);
    assert_eq!(outcome.output, "No person named 'Nobody' in the displayed list");
}

#[test]
fn test_help_shows_usage() {
    let mut logic: Logic<NullStorage, FixedClock> = create_test_logic();

    let outcome: Outcome = handle_line(&mut logic, "help", &create_test_screen());

    assert!(outcome.output.starts_with(messages::MESSAGE_SHOWING_HELP));
    assert!(outcome.output.contains("schedule: Adds or edits the interview date"));
}

#[test]
fn test_note_shows_note_only() {
    let mut logic: Logic<NullStorage, FixedClock> = create_test_logic();

    let outcome: Outcome = handle_line(&mut logic, "note n/bernice yu", &create_test_screen());

    assert_eq!(
        outcome.output,
        "Showing note of Bernice Yu\nNote for Bernice Yu:\n    (no note)"
    );
}

#[test]
fn test_exit_stops() {
    let mut logic: Logic<NullStorage, FixedClock> = create_test_logic();

    let outcome: Outcome = handle_line(&mut logic, "exit", &create_test_screen());

    assert!(outcome.exit);
    assert_eq!(outcome.output, messages::MESSAGE_EXIT);
}
