// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    FailingStorage, MemoryStorage, TODAY, create_booked_person, create_test_model,
    create_test_person,
};
use crate::{CommandResult, FixedClock, Logic, LogicError, Model, ParseError};
use hirehive_domain::{AddressBook, InterviewDate};
use time::Duration;

#[test]
fn test_change_is_saved() {
    let mut logic: Logic<MemoryStorage, FixedClock> =
        Logic::new(Model::new(), MemoryStorage::default(), FixedClock(TODAY));

    let result: CommandResult = logic
        .execute("add n/Bob p/98765432 e/bob@example.com a/311, Clementi Ave 2, #02-25 r/Data Analyst")
        .unwrap();

    assert!(result.is_change);
    let saved: Vec<AddressBook> = logic.storage().saved.borrow().clone();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].contains(&create_test_person("Bob")));
}

#[test]
fn test_query_is_not_saved() {
    let mut logic: Logic<MemoryStorage, FixedClock> = Logic::new(
        create_test_model(vec![create_test_person("Bob")]),
        MemoryStorage::default(),
        FixedClock(TODAY),
    );

    logic.execute("find bob").unwrap();
    logic.execute("list").unwrap();

    assert!(logic.storage().saved.borrow().is_empty());
}

#[test]
fn test_parse_error_is_reported() {
    let mut logic: Logic<MemoryStorage, FixedClock> =
        Logic::new(Model::new(), MemoryStorage::default(), FixedClock(TODAY));

    let result: Result<CommandResult, LogicError> = logic.execute("dance");

    assert_eq!(
        result,
        Err(LogicError::Parse(ParseError::UnknownCommand {
            word: String::from("dance")
        }))
    );
}

#[test]
fn test_failed_save_keeps_change_in_memory() {
    let mut logic: Logic<FailingStorage, FixedClock> = Logic::new(
        create_test_model(vec![create_test_person("Bob")]),
        FailingStorage,
        FixedClock(TODAY),
    );

    let result: Result<CommandResult, LogicError> = logic.execute("delete n/Bob");

    assert_eq!(
        result,
        Err(LogicError::Storage {
            message: String::from("disk is read-only")
        })
    );
    assert!(logic.address_book().is_empty());
}

#[test]
fn test_schedule_uses_clock() {
    let mut logic: Logic<MemoryStorage, FixedClock> = Logic::new(
        create_test_model(vec![
            create_test_person("Alice"),
            create_booked_person("Carol", TODAY + Duration::days(1)),
        ]),
        MemoryStorage::default(),
        FixedClock(TODAY),
    );

    assert_eq!(
        logic.available_date(),
        Ok(InterviewDate::new(TODAY + Duration::days(2)))
    );
    logic.execute("schedule n/Alice").unwrap();
    assert_eq!(
        logic.filtered_persons()[0].interview_date(),
        Some(InterviewDate::new(TODAY + Duration::days(2)))
    );
}
