// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Address, Email, Name, Phone, Role, Tag};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Name is empty or contains characters other than letters, digits and spaces.
    InvalidName(String),
    /// Phone number is not made of at least three digits.
    InvalidPhone(String),
    /// Email address is malformed.
    InvalidEmail(String),
    /// Address is blank.
    InvalidAddress(String),
    /// Role is blank.
    InvalidRole(String),
    /// Tag is not one of the pipeline stages.
    InvalidTag(String),
    /// Failed to parse an interview date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// An identical record already exists in the address book.
    DuplicatePerson {
        /// The name on the duplicated record.
        name: String,
    },
    /// No record matched a name lookup.
    PersonNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// More than one record matched a name lookup.
    AmbiguousName {
        /// The name that was looked up.
        name: String,
        /// How many records carry that name.
        matches: usize,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => {
                write!(f, "Invalid name '{value}': {}", Name::MESSAGE_CONSTRAINTS)
            }
            Self::InvalidPhone(value) => {
                write!(f, "Invalid phone '{value}': {}", Phone::MESSAGE_CONSTRAINTS)
            }
            Self::InvalidEmail(value) => {
                write!(f, "Invalid email '{value}': {}", Email::MESSAGE_CONSTRAINTS)
            }
            Self::InvalidAddress(value) => {
                write!(
                    f,
                    "Invalid address '{value}': {}",
                    Address::MESSAGE_CONSTRAINTS
                )
            }
            Self::InvalidRole(value) => {
                write!(f, "Invalid role '{value}': {}", Role::MESSAGE_CONSTRAINTS)
            }
            Self::InvalidTag(value) => {
                write!(f, "Invalid tag '{value}': {}", Tag::MESSAGE_CONSTRAINTS)
            }
            Self::DateParseError { date_string, error } => {
                write!(
                    f,
                    "Failed to parse date '{date_string}': {error}. Dates are written as DD/MM/YYYY"
                )
            }
            Self::DuplicatePerson { name } => {
                write!(f, "An identical record for '{name}' already exists")
            }
            Self::PersonNotFound { name } => {
                write!(f, "No person named '{name}' in the displayed list")
            }
            Self::AmbiguousName { name, matches } => {
                write!(
                    f,
                    "{matches} people named '{name}' are displayed; narrow the list with find or filter first"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
