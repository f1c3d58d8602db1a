// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{is_valid_email, is_valid_free_text, is_valid_name, is_valid_phone};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Text form of an interview date: `DD/MM/YYYY`.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Declares a validated, trimmed string field.
///
/// The generated type serializes as a bare string and re-validates on
/// deserialization, so a hand-edited data file cannot smuggle in bad values.
macro_rules! validated_text {
    ($(#[$meta:meta])* $ty:ident, $check:path, $variant:ident, $constraints:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ty {
            value: String,
        }

        impl $ty {
            /// Describes the values this field accepts.
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            /// Creates a new value from `value` with surrounding whitespace removed.
            ///
            /// # Errors
            ///
            /// Returns an error if the trimmed value violates the field's constraints.
            pub fn new(value: &str) -> Result<Self, DomainError> {
                let trimmed: &str = value.trim();
                if !$check(trimmed) {
                    return Err(DomainError::$variant(trimmed.to_string()));
                }
                Ok(Self {
                    value: trimmed.to_string(),
                })
            }

            /// Returns the stored value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.value
            }
        }

        impl TryFrom<String> for $ty {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(field: $ty) -> Self {
                field.value
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

validated_text!(
    /// A person's full name. Used as the lookup key for commands that target a person.
    Name,
    is_valid_name,
    InvalidName,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank"
);

validated_text!(
    /// A phone number of at least three digits.
    Phone,
    is_valid_phone,
    InvalidPhone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

validated_text!(
    /// An email address of the form `local-part@domain`.
    Email,
    is_valid_email,
    InvalidEmail,
    "Emails should be of the format local-part@domain. The local-part may only contain \
     alphanumeric characters separated by one of +_.- and the domain is made of labels \
     separated by periods, the last label at least 2 characters long"
);

validated_text!(
    /// A postal address.
    Address,
    is_valid_free_text,
    InvalidAddress,
    "Addresses can take any values, and it should not be blank"
);

validated_text!(
    /// The role a person is being hired for.
    Role,
    is_valid_free_text,
    InvalidRole,
    "Roles can take any values, and it should not be blank"
);

impl Name {
    /// Returns true if `query` names this person, ignoring ASCII case and
    /// surrounding whitespace.
    #[must_use]
    pub fn matches_ignore_case(&self, query: &str) -> bool {
        self.value.eq_ignore_ascii_case(query.trim())
    }
}

/// The pipeline stage of a candidate.
///
/// Every person carries exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Tag {
    /// Newly added; the default for every record.
    #[default]
    Applicant,
    /// Shortlisted.
    Candidate,
    /// Has an interview scheduled.
    Interviewee,
    /// Received an offer. Terminal.
    Offered,
    /// Turned down. Terminal.
    Rejected,
}

impl Tag {
    /// Describes the values a tag accepts.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Tags should be one of Applicant, Candidate, Interviewee, Offered or Rejected";

    /// Every tag in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Applicant,
        Self::Candidate,
        Self::Interviewee,
        Self::Offered,
        Self::Rejected,
    ];

    /// Converts this tag to its display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Applicant => "Applicant",
            Self::Candidate => "Candidate",
            Self::Interviewee => "Interviewee",
            Self::Offered => "Offered",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns whether an interview may be scheduled for a person at this stage.
    ///
    /// Offered and Rejected are terminal stages.
    #[must_use]
    pub const fn is_schedulable(&self) -> bool {
        !matches!(self, Self::Offered | Self::Rejected)
    }

    /// Returns the tag a person holds once an interview is scheduled.
    ///
    /// Applicants and candidates become interviewees; every other tag is kept.
    #[must_use]
    pub const fn after_scheduling(self) -> Self {
        match self {
            Self::Applicant | Self::Candidate => Self::Interviewee,
            other => other,
        }
    }
}

impl FromStr for Tag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidTag(trimmed.to_string()))
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_str().to_string()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled interview date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InterviewDate {
    date: Date,
}

impl InterviewDate {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self { date }
    }

    /// Parses a `DD/MM/YYYY` date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the text is not a valid calendar date
    /// in that format.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        Date::parse(trimmed, DATE_FORMAT)
            .map(Self::new)
            .map_err(|err| DomainError::DateParseError {
                date_string: trimmed.to_string(),
                error: err.to_string(),
            })
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

impl TryFrom<String> for InterviewDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<InterviewDate> for String {
    fn from(date: InterviewDate) -> Self {
        date.to_string()
    }
}

impl std::fmt::Display for InterviewDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self.date.format(DATE_FORMAT).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

/// Free-text remarks about a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note {
    value: String,
}

impl Note {
    /// Creates a note. Surrounding whitespace is removed.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the note text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the note has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A candidate record.
///
/// Records are immutable values: edits build a new `Person` and replace the old
/// one wholesale. Two records are the same record only if every field matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    role: Role,
    #[serde(default)]
    tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interview_date: Option<InterviewDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_note"
    )]
    note: Option<Note>,
}

/// Reads a note the way `Person::with_note` stores one: trimmed, and absent when blank.
fn deserialize_note<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Note>, D::Error> {
    let text: Option<String> = Option::deserialize(deserializer)?;
    Ok(text
        .map(|text| Note::new(&text))
        .filter(|note| !note.is_empty()))
}

impl Person {
    /// Creates a new applicant with no interview date and no note.
    ///
    /// # Arguments
    ///
    /// * `name` - The person's name
    /// * `phone` - The person's phone number
    /// * `email` - The person's email address
    /// * `address` - The person's address
    /// * `role` - The role the person applied for
    #[must_use]
    pub const fn new(name: Name, phone: Phone, email: Email, address: Address, role: Role) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            role,
            tag: Tag::Applicant,
            interview_date: None,
            note: None,
        }
    }

    /// Returns this record with a different tag.
    #[must_use]
    pub const fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    /// Returns this record with a different interview date.
    #[must_use]
    pub const fn with_interview_date(mut self, interview_date: Option<InterviewDate>) -> Self {
        self.interview_date = interview_date;
        self
    }

    /// Returns this record with a different note. Empty notes are dropped.
    #[must_use]
    pub fn with_note(mut self, note: Option<Note>) -> Self {
        self.note = note.filter(|n| !n.is_empty());
        self
    }

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub const fn role(&self) -> &Role {
        &self.role
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    #[must_use]
    pub const fn interview_date(&self) -> Option<InterviewDate> {
        self.interview_date
    }

    #[must_use]
    pub const fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Role: {}; Tag: {}",
            self.name, self.phone, self.email, self.address, self.role, self.tag
        )?;
        if let Some(date) = self.interview_date {
            write!(f, "; Interview: {date}")?;
        }
        if let Some(note) = &self.note {
            write!(f, "; Note: {note}")?;
        }
        Ok(())
    }
}
