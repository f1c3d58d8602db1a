// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Address, Email, InterviewDate, Name, Person, Phone, Role, Tag};
use time::Date;

pub fn create_test_person(name: &str) -> Person {
    let email: String = format!("{}@example.com", name.replace(' ', "").to_lowercase());
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("91234567").unwrap(),
        Email::new(&email).unwrap(),
        Address::new("Blk 123 Clementi Ave 3").unwrap(),
        Role::new("Software Engineer").unwrap(),
    )
}

pub fn create_tagged_person(name: &str, tag: Tag) -> Person {
    create_test_person(name).with_tag(tag)
}

pub fn create_booked_person(name: &str, date: Date) -> Person {
    create_tagged_person(name, Tag::Interviewee).with_interview_date(Some(InterviewDate::new(date)))
}
