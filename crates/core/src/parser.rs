// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns one line of user input into a [`Command`].

use crate::command::{Command, EditPersonDescriptor, NameQuery};
use crate::error::ParseError;
use crate::syntax::{
    PREFIX_ADDRESS, PREFIX_DATE, PREFIX_EMAIL, PREFIX_NAME, PREFIX_NOTE, PREFIX_PHONE,
    PREFIX_ROLE, PREFIX_TAG, Prefix,
};
use crate::tokenizer::{ArgumentMultimap, tokenize};
use hirehive_domain::{
    Address, DomainError, Email, InterviewDate, Name, Note, Person, Phone, Role, Tag,
};
use tracing::debug;

/// Parses user input into a command.
///
/// The first whitespace-delimited word selects the command; the rest is its
/// argument text. Commands that take no arguments ignore any trailing text.
///
/// # Errors
///
/// Returns an error if:
/// - The input is blank
/// - The command word is unknown
/// - Required arguments are missing, repeated, or invalid
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: Command::HELP_USAGE,
        });
    }
    let (word, args): (&str, &str) = trimmed
        .find(char::is_whitespace)
        .map_or((trimmed, ""), |split| trimmed.split_at(split));
    debug!(word, args, "Parsing command");

    match word {
        Command::ADD_WORD => parse_add(args),
        Command::EDIT_WORD => parse_edit(args),
        Command::DELETE_WORD => parse_delete(args),
        Command::TAG_WORD => parse_tag(args),
        Command::SCHEDULE_WORD => parse_schedule(args),
        Command::NOTE_WORD => parse_note(args),
        Command::FIND_WORD => parse_find(args),
        Command::FILTER_WORD => parse_filter(args),
        Command::LIST_WORD => Ok(Command::List),
        Command::CLEAR_WORD => Ok(Command::Clear),
        Command::UNDO_WORD => Ok(Command::Undo),
        Command::HELP_WORD => Ok(Command::Help),
        Command::EXIT_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand {
            word: word.to_string(),
        }),
    }
}

/// Tokenizes `args`, requiring `required` prefixes, an empty preamble, and at
/// most one value for every prefix in `prefixes`.
fn tokenize_strict(
    args: &str,
    prefixes: &[Prefix],
    required: &[Prefix],
    usage: &'static str,
) -> Result<ArgumentMultimap, ParseError> {
    let multimap: ArgumentMultimap = tokenize(args, prefixes);
    if !multimap.has_all(required) || !multimap.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    multimap.verify_no_duplicate_prefixes_for(prefixes)?;
    Ok(multimap)
}

/// Returns the value of a prefix that `tokenize_strict` already required.
fn required_value<'a>(
    multimap: &'a ArgumentMultimap,
    prefix: Prefix,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    multimap
        .value(prefix)
        .ok_or(ParseError::InvalidFormat { usage })
}

/// Parses an optional field with `parse`.
fn optional_value<T>(
    multimap: &ArgumentMultimap,
    prefix: Prefix,
    parse: impl FnOnce(&str) -> Result<T, DomainError>,
) -> Result<Option<T>, ParseError> {
    multimap
        .value(prefix)
        .map(parse)
        .transpose()
        .map_err(ParseError::from)
}

fn parse_add(args: &str) -> Result<Command, ParseError> {
    const PREFIXES: [Prefix; 5] = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_ROLE,
    ];
    let usage: &'static str = Command::ADD_USAGE;
    let multimap: ArgumentMultimap = tokenize_strict(args, &PREFIXES, &PREFIXES, usage)?;

    let person: Person = Person::new(
        Name::new(required_value(&multimap, PREFIX_NAME, usage)?)?,
        Phone::new(required_value(&multimap, PREFIX_PHONE, usage)?)?,
        Email::new(required_value(&multimap, PREFIX_EMAIL, usage)?)?,
        Address::new(required_value(&multimap, PREFIX_ADDRESS, usage)?)?,
        Role::new(required_value(&multimap, PREFIX_ROLE, usage)?)?,
    );
    Ok(Command::Add { person })
}

fn parse_edit(args: &str) -> Result<Command, ParseError> {
    const PREFIXES: [Prefix; 8] = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_ROLE,
        PREFIX_TAG,
        PREFIX_DATE,
        PREFIX_NOTE,
    ];
    let multimap: ArgumentMultimap = tokenize(args, &PREFIXES);
    if multimap.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: Command::EDIT_USAGE,
        });
    }
    multimap.verify_no_duplicate_prefixes_for(&PREFIXES)?;

    let query: NameQuery = NameQuery::new(multimap.preamble())?;
    let descriptor: EditPersonDescriptor = EditPersonDescriptor {
        name: optional_value(&multimap, PREFIX_NAME, Name::new)?,
        phone: optional_value(&multimap, PREFIX_PHONE, Phone::new)?,
        email: optional_value(&multimap, PREFIX_EMAIL, Email::new)?,
        address: optional_value(&multimap, PREFIX_ADDRESS, Address::new)?,
        role: optional_value(&multimap, PREFIX_ROLE, Role::new)?,
        tag: optional_value(&multimap, PREFIX_TAG, str::parse::<Tag>)?,
        interview_date: optional_value(&multimap, PREFIX_DATE, InterviewDate::parse)?,
        note: optional_value(&multimap, PREFIX_NOTE, |text| Ok(Note::new(text)))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::Edit { query, descriptor })
}

fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let usage: &'static str = Command::DELETE_USAGE;
    let multimap: ArgumentMultimap = tokenize_strict(args, &[PREFIX_NAME], &[PREFIX_NAME], usage)?;
    let query: NameQuery = NameQuery::new(required_value(&multimap, PREFIX_NAME, usage)?)?;
    Ok(Command::Delete { query })
}

fn parse_tag(args: &str) -> Result<Command, ParseError> {
    const PREFIXES: [Prefix; 2] = [PREFIX_NAME, PREFIX_TAG];
    let usage: &'static str = Command::TAG_USAGE;
    let multimap: ArgumentMultimap = tokenize_strict(args, &PREFIXES, &PREFIXES, usage)?;
    let query: NameQuery = NameQuery::new(required_value(&multimap, PREFIX_NAME, usage)?)?;
    let tag: Tag = required_value(&multimap, PREFIX_TAG, usage)?.parse()?;
    Ok(Command::Tag { query, tag })
}

fn parse_schedule(args: &str) -> Result<Command, ParseError> {
    let usage: &'static str = Command::SCHEDULE_USAGE;
    let multimap: ArgumentMultimap =
        tokenize_strict(args, &[PREFIX_NAME, PREFIX_DATE], &[PREFIX_NAME], usage)?;
    let query: NameQuery = NameQuery::new(required_value(&multimap, PREFIX_NAME, usage)?)?;
    let date: Option<InterviewDate> = optional_value(&multimap, PREFIX_DATE, InterviewDate::parse)?;
    Ok(Command::Schedule { query, date })
}

fn parse_note(args: &str) -> Result<Command, ParseError> {
    let usage: &'static str = Command::NOTE_USAGE;
    let multimap: ArgumentMultimap = tokenize_strict(args, &[PREFIX_NAME], &[PREFIX_NAME], usage)?;
    let query: NameQuery = NameQuery::new(required_value(&multimap, PREFIX_NAME, usage)?)?;
    Ok(Command::Note { query })
}

fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords: String = args.split_whitespace().collect::<Vec<&str>>().join(" ");
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: Command::FIND_USAGE,
        });
    }
    Ok(Command::Find { keywords })
}

fn parse_filter(args: &str) -> Result<Command, ParseError> {
    let usage: &'static str = Command::FILTER_USAGE;
    let multimap: ArgumentMultimap = tokenize_strict(args, &[PREFIX_TAG], &[PREFIX_TAG], usage)?;
    let tag: Tag = required_value(&multimap, PREFIX_TAG, usage)?.parse()?;
    Ok(Command::Filter { tag })
}
