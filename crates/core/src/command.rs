// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::syntax::{
    PREFIX_ADDRESS, PREFIX_DATE, PREFIX_EMAIL, PREFIX_NAME, PREFIX_NOTE, PREFIX_PHONE,
    PREFIX_ROLE, PREFIX_TAG,
};
use hirehive_domain::{
    Address, DomainError, Email, InterviewDate, Name, Note, Person, Phone, Role, Tag,
};

/// A reference to one person by name.
///
/// Resolution is against the displayed list and requires exactly one record
/// whose full name equals the query, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    name: Name,
}

impl NameQuery {
    /// Creates a query for `name`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the text could never be a name.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: Name::new(name)?,
        })
    }

    /// Returns the queried name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Finds the single person this query names among `candidates`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No candidate carries the name
    /// - More than one candidate carries the name
    pub fn resolve<'a>(&self, candidates: &[&'a Person]) -> Result<&'a Person, DomainError> {
        let matches: Vec<&'a Person> = candidates
            .iter()
            .copied()
            .filter(|person| person.name().matches_ignore_case(self.name.value()))
            .collect();
        match matches.as_slice() {
            [person] => Ok(*person),
            [] => Err(DomainError::PersonNotFound {
                name: self.name.value().to_string(),
            }),
            many => Err(DomainError::AmbiguousName {
                name: self.name.value().to_string(),
                matches: many.len(),
            }),
        }
    }
}

impl std::fmt::Display for NameQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The fields an edit replaces. Unset fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub role: Option<Role>,
    pub tag: Option<Tag>,
    pub interview_date: Option<InterviewDate>,
    /// `Some` with an empty note clears the note.
    pub note: Option<Note>,
}

impl EditPersonDescriptor {
    /// Returns true if at least one field is set.
    #[must_use]
    pub const fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.role.is_some()
            || self.tag.is_some()
            || self.interview_date.is_some()
            || self.note.is_some()
    }
}

/// Builds the replacement for `person` by laying `descriptor` over it.
///
/// Never mutates `person`; an empty descriptor yields an equal record.
#[must_use]
pub fn create_edited_person(person: &Person, descriptor: &EditPersonDescriptor) -> Person {
    let note: Option<Note> = match &descriptor.note {
        Some(note) => Some(note.clone()),
        None => person.note().cloned(),
    };
    Person::new(
        descriptor.name.clone().unwrap_or_else(|| person.name().clone()),
        descriptor.phone.clone().unwrap_or_else(|| person.phone().clone()),
        descriptor.email.clone().unwrap_or_else(|| person.email().clone()),
        descriptor
            .address
            .clone()
            .unwrap_or_else(|| person.address().clone()),
        descriptor.role.clone().unwrap_or_else(|| person.role().clone()),
    )
    .with_tag(descriptor.tag.unwrap_or_else(|| person.tag()))
    .with_interview_date(descriptor.interview_date.or_else(|| person.interview_date()))
    .with_note(note)
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Two commands are equal
/// when they are the same variant with equal arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new applicant.
    Add {
        /// The record to add.
        person: Person,
    },
    /// Replace some fields of a person.
    Edit {
        /// The person to edit.
        query: NameQuery,
        /// The fields to replace.
        descriptor: EditPersonDescriptor,
    },
    /// Remove a person.
    Delete {
        /// The person to remove.
        query: NameQuery,
    },
    /// Move a person to another pipeline stage.
    Tag {
        /// The person to tag.
        query: NameQuery,
        /// The new tag.
        tag: Tag,
    },
    /// Book an interview, picking the next free date when none is given.
    Schedule {
        /// The person to schedule.
        query: NameQuery,
        /// The requested date.
        date: Option<InterviewDate>,
    },
    /// Show a person's note.
    Note {
        /// The person whose note to show.
        query: NameQuery,
    },
    /// Show every person.
    List,
    /// Show people whose name contains the keywords as whole words.
    Find {
        /// Whitespace-normalised keywords.
        keywords: String,
    },
    /// Show people with the given tag.
    Filter {
        /// The tag to match.
        tag: Tag,
    },
    /// Remove every person.
    Clear,
    /// Revert the most recent change.
    Undo,
    /// Show usage help.
    Help,
    /// Quit.
    Exit,
}

impl Command {
    pub const ADD_WORD: &'static str = "add";
    pub const EDIT_WORD: &'static str = "edit";
    pub const DELETE_WORD: &'static str = "delete";
    pub const TAG_WORD: &'static str = "tag";
    pub const SCHEDULE_WORD: &'static str = "schedule";
    pub const NOTE_WORD: &'static str = "note";
    pub const LIST_WORD: &'static str = "list";
    pub const FIND_WORD: &'static str = "find";
    pub const FILTER_WORD: &'static str = "filter";
    pub const CLEAR_WORD: &'static str = "clear";
    pub const UNDO_WORD: &'static str = "undo";
    pub const HELP_WORD: &'static str = "help";
    pub const EXIT_WORD: &'static str = "exit";

    pub const ADD_USAGE: &'static str = "add: Adds a person to the address book as an Applicant.\n\
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS r/ROLE\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 r/Software Engineer";
    pub const EDIT_USAGE: &'static str = "edit: Edits the details of the person identified by name in the displayed list.\n\
        Unspecified fields keep their values. An empty i/ clears the note.\n\
        Parameters: NAME [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [r/ROLE] [t/TAG] [id/DATE] [i/NOTE]\n\
        Example: edit John Doe p/91234567 e/johndoe@example.com";
    pub const DELETE_USAGE: &'static str = "delete: Deletes the person identified by name in the displayed list.\n\
        Parameters: n/NAME\n\
        Example: delete n/John Doe";
    pub const TAG_USAGE: &'static str = "tag: Moves the person identified by name to another stage.\n\
        Parameters: n/NAME t/TAG\n\
        Example: tag n/John Doe t/Candidate";
    pub const SCHEDULE_USAGE: &'static str = "schedule: Adds or edits the interview date for the person identified by name in the displayed list.\n\
        If no date is specified, the next available date starting from the next day will be used instead,\n\
        even when the person already has an interview booked.\n\
        Parameters: n/NAME [id/DATE]\n\
        Example: schedule n/John id/01/05/2025";
    pub const NOTE_USAGE: &'static str = "note: Shows the note of the person identified by name in the displayed list.\n\
        Parameters: n/NAME\n\
        Example: note n/John Doe";
    pub const FIND_USAGE: &'static str = "find: Finds all persons whose names contain the keywords as whole words (case-insensitive).\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice";
    pub const FILTER_USAGE: &'static str = "filter: Shows all persons with the given tag.\n\
        Parameters: t/TAG\n\
        Example: filter t/Interviewee";
    pub const LIST_USAGE: &'static str = "list: Shows every person.";
    pub const CLEAR_USAGE: &'static str = "clear: Removes every person.";
    pub const UNDO_USAGE: &'static str = "undo: Reverts the most recent change.";
    pub const HELP_USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";
    pub const EXIT_USAGE: &'static str = "exit: Saves and quits.";

    /// Usage text of every command, in the order the help screen lists them.
    pub const ALL_USAGES: [&'static str; 13] = [
        Self::ADD_USAGE,
        Self::EDIT_USAGE,
        Self::DELETE_USAGE,
        Self::TAG_USAGE,
        Self::SCHEDULE_USAGE,
        Self::NOTE_USAGE,
        Self::LIST_USAGE,
        Self::FIND_USAGE,
        Self::FILTER_USAGE,
        Self::CLEAR_USAGE,
        Self::UNDO_USAGE,
        Self::HELP_USAGE,
        Self::EXIT_USAGE,
    ];

    /// Returns the command word of this command.
    #[must_use]
    pub const fn word(&self) -> &'static str {
        match self {
            Self::Add { .. } => Self::ADD_WORD,
            Self::Edit { .. } => Self::EDIT_WORD,
            Self::Delete { .. } => Self::DELETE_WORD,
            Self::Tag { .. } => Self::TAG_WORD,
            Self::Schedule { .. } => Self::SCHEDULE_WORD,
            Self::Note { .. } => Self::NOTE_WORD,
            Self::List => Self::LIST_WORD,
            Self::Find { .. } => Self::FIND_WORD,
            Self::Filter { .. } => Self::FILTER_WORD,
            Self::Clear => Self::CLEAR_WORD,
            Self::Undo => Self::UNDO_WORD,
            Self::Help => Self::HELP_WORD,
            Self::Exit => Self::EXIT_WORD,
        }
    }
}

/// Formats the command as the canonical text that parses back into it.
impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.word())?;
        match self {
            Self::Add { person } => write!(
                f,
                " {PREFIX_NAME}{} {PREFIX_PHONE}{} {PREFIX_EMAIL}{} {PREFIX_ADDRESS}{} {PREFIX_ROLE}{}",
                person.name(),
                person.phone(),
                person.email(),
                person.address(),
                person.role()
            ),
            Self::Edit { query, descriptor } => {
                write!(f, " {query}")?;
                write_field(f, PREFIX_NAME, descriptor.name.as_ref())?;
                write_field(f, PREFIX_PHONE, descriptor.phone.as_ref())?;
                write_field(f, PREFIX_EMAIL, descriptor.email.as_ref())?;
                write_field(f, PREFIX_ADDRESS, descriptor.address.as_ref())?;
                write_field(f, PREFIX_ROLE, descriptor.role.as_ref())?;
                write_field(f, PREFIX_TAG, descriptor.tag.as_ref())?;
                write_field(f, PREFIX_DATE, descriptor.interview_date.as_ref())?;
                write_field(f, PREFIX_NOTE, descriptor.note.as_ref())
            }
            Self::Delete { query } | Self::Note { query } => write!(f, " {PREFIX_NAME}{query}"),
            Self::Tag { query, tag } => write!(f, " {PREFIX_NAME}{query} {PREFIX_TAG}{tag}"),
            Self::Schedule { query, date } => {
                write!(f, " {PREFIX_NAME}{query}")?;
                write_field(f, PREFIX_DATE, date.as_ref())
            }
            Self::Find { keywords } => write!(f, " {keywords}"),
            Self::Filter { tag } => write!(f, " {PREFIX_TAG}{tag}"),
            Self::List | Self::Clear | Self::Undo | Self::Help | Self::Exit => Ok(()),
        }
    }
}

fn write_field<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    prefix: crate::syntax::Prefix,
    value: Option<&T>,
) -> std::fmt::Result {
    match value {
        Some(value) => write!(f, " {prefix}{value}"),
        None => Ok(()),
    }
}
