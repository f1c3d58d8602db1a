// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hirehive_domain::{DomainError, InterviewDate, Tag};
use thiserror::Error;

/// Malformed command text. The model is never touched when parsing fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first word is not a known command.
    #[error("Unknown command: {word}")]
    UnknownCommand {
        /// The unrecognised command word.
        word: String,
    },
    /// Required arguments are missing or unexpected text is present.
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat {
        /// The usage text of the command being parsed.
        usage: &'static str,
    },
    /// A single-valued prefix was given more than once.
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        .prefixes.join(" ")
    )]
    DuplicatePrefixes {
        /// The repeated prefixes, in declaration order.
        prefixes: Vec<String>,
    },
    /// `edit` was given a target but nothing to change.
    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,
    /// A field value failed validation.
    #[error(transparent)]
    InvalidValue(#[from] DomainError),
}

/// A well-formed command whose preconditions failed at execution time.
///
/// The model is left exactly as it was before the command ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Scheduling was attempted for a person in a terminal stage.
    #[error(
        "{name} has invalid tag: {tag}.\nYou can only schedule interviews with people who are Applicants, Candidates or Interviewees."
    )]
    InvalidPerson {
        /// The person's name.
        name: String,
        /// The person's current tag.
        tag: Tag,
    },
    /// The requested interview date belongs to someone else.
    #[error("{date} is already booked for {booked_by}'s interview")]
    DateTaken {
        /// The requested date.
        date: InterviewDate,
        /// The person holding that date.
        booked_by: String,
    },
    /// `undo` was run with no recorded change.
    #[error("There is no change to undo")]
    NothingToUndo,
    /// A domain rule was violated (duplicate, not found, ambiguous name).
    #[error(transparent)]
    DomainViolation(#[from] DomainError),
}

/// Any failure while executing one line of command text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    /// The text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The command could not be executed.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The command ran but the data file could not be written.
    #[error("Could not save data due to the following error: {message}")]
    Storage {
        /// The storage error message.
        message: String,
    },
}
