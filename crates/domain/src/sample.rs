// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in records used when no data file can be loaded.

use crate::address_book::AddressBook;
use crate::error::DomainError;
use crate::types::{Address, Email, Name, Note, Person, Phone, Role, Tag};

/// Raw fields of one sample record: name, phone, email, address, role, tag, note.
type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Tag,
    Option<&'static str>,
);

const SAMPLE_ROWS: [SampleRow; 6] = [
    (
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        "Software Engineer",
        Tag::Applicant,
        None,
    ),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        "Product Manager",
        Tag::Candidate,
        Some("Referred by the platform team"),
    ),
    (
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        "Data Analyst",
        Tag::Applicant,
        None,
    ),
    (
        "David Li",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
        "Site Reliability Engineer",
        Tag::Offered,
        Some("Start date pending"),
    ),
    (
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        "Blk 47 Tampines Street 20, #17-35",
        "UX Designer",
        Tag::Rejected,
        None,
    ),
    (
        "Roy Balakrishnan",
        "92624417",
        "royb@example.com",
        "Blk 45 Aljunied Street 85, #11-31",
        "QA Engineer",
        Tag::Candidate,
        None,
    ),
];

/// Returns the sample records.
///
/// # Errors
///
/// Returns an error only if a sample row fails validation.
pub fn sample_persons() -> Result<Vec<Person>, DomainError> {
    SAMPLE_ROWS
        .iter()
        .map(|&(name, phone, email, address, role, tag, note)| {
            Ok(Person::new(
                Name::new(name)?,
                Phone::new(phone)?,
                Email::new(email)?,
                Address::new(address)?,
                Role::new(role)?,
            )
            .with_tag(tag)
            .with_note(note.map(Note::new)))
        })
        .collect()
}

/// Returns an address book holding the sample records.
///
/// # Errors
///
/// Returns an error only if a sample row fails validation.
pub fn sample_address_book() -> Result<AddressBook, DomainError> {
    AddressBook::from_persons(sample_persons()?)
}
