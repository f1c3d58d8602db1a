// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AddressBookStorage, Command, CommandError, CommandResult, Model, apply, parse_command};
use hirehive_audit::Cause;
use hirehive_domain::{
    Address, AddressBook, Email, InterviewDate, Name, Person, Phone, Role, Tag,
};
use std::cell::RefCell;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2025 - 03 - 10);

pub fn create_test_person(name: &str) -> Person {
    let email: String = format!("{}@example.com", name.replace(' ', "").to_lowercase());
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new(&email).unwrap(),
        Address::new("311, Clementi Ave 2, #02-25").unwrap(),
        Role::new("Data Analyst").unwrap(),
    )
}

pub fn create_tagged_person(name: &str, tag: Tag) -> Person {
    create_test_person(name).with_tag(tag)
}

pub fn create_booked_person(name: &str, date: Date) -> Person {
    create_tagged_person(name, Tag::Interviewee).with_interview_date(Some(InterviewDate::new(date)))
}

pub fn create_test_model(persons: Vec<Person>) -> Model {
    Model::with_address_book(AddressBook::from_persons(persons).unwrap())
}

/// Parses and applies `text` against `model` as of `TODAY`.
pub fn run(model: &mut Model, text: &str) -> Result<CommandResult, CommandError> {
    let command: Command = parse_command(text).unwrap();
    apply(model, command, Cause::new(text.to_string()), TODAY)
}

/// Keeps every saved address book in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub saved: RefCell<Vec<AddressBook>>,
}

impl AddressBookStorage for MemoryStorage {
    type Error = String;

    fn save_address_book(&self, address_book: &AddressBook) -> Result<(), Self::Error> {
        self.saved.borrow_mut().push(address_book.clone());
        Ok(())
    }
}

/// Rejects every save.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl AddressBookStorage for FailingStorage {
    type Error = String;

    fn save_address_book(&self, _address_book: &AddressBook) -> Result<(), Self::Error> {
        Err(String::from("disk is read-only"))
    }
}
