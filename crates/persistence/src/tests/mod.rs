// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use hirehive_domain::{
    Address, AddressBook, Email, InterviewDate, Name, Note, Person, Phone, Role, Tag,
};
use time::macros::date;

pub fn create_test_person(name: &str) -> Person {
    let email: String = format!("{}@example.com", name.replace(' ', "").to_lowercase());
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("87438807").unwrap(),
        Email::new(&email).unwrap(),
        Address::new("Blk 30 Geylang Street 29, #06-40").unwrap(),
        Role::new("Backend Engineer").unwrap(),
    )
}

pub fn create_test_address_book() -> AddressBook {
    AddressBook::from_persons(vec![
        create_test_person("Alice Tan"),
        create_test_person("Bob Lim")
            .with_tag(Tag::Interviewee)
            .with_interview_date(Some(InterviewDate::new(date!(2025 - 04 - 03))))
            .with_note(Some(Note::new("Asked for a remote role"))),
    ])
    .unwrap()
}
