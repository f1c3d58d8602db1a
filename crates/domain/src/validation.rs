// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used)]

use crate::error::DomainError;
use crate::types::Person;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // local-part: alphanumeric runs joined by a single special character
    // domain: hyphenated labels separated by dots, last label at least 2 chars
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]+(-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});
static NON_BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S.*$").expect("valid text regex"));

/// Returns true if `value` is a valid person name.
#[must_use]
pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Returns true if `value` is a valid phone number.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Returns true if `value` is a valid email address.
///
/// The last domain label must be at least two characters long.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if !EMAIL_RE.is_match(value) {
        return false;
    }
    value
        .rsplit(['.', '@'])
        .next()
        .is_some_and(|last_label| last_label.chars().count() >= 2)
}

/// Returns true if `value` does not start with whitespace and is not empty.
#[must_use]
pub fn is_valid_free_text(value: &str) -> bool {
    NON_BLANK_RE.is_match(value)
}

/// Validates that a person is not already present in a collection.
///
/// Uniqueness is full-field equality: two records that share a name but differ
/// in any other field are distinct.
///
/// # Arguments
///
/// * `person` - The candidate record
/// * `existing` - The records already stored
///
/// # Errors
///
/// Returns `DomainError::DuplicatePerson` if an identical record exists.
pub fn validate_person_unique(person: &Person, existing: &[Person]) -> Result<(), DomainError> {
    if existing.contains(person) {
        return Err(DomainError::DuplicatePerson {
            name: person.name().value().to_string(),
        });
    }
    Ok(())
}
