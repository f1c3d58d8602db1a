// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, EditPersonDescriptor, NameQuery, create_edited_person};
use crate::error::CommandError;
use crate::messages;
use crate::model::Model;
use crate::result::CommandResult;
use hirehive_audit::{Action, AuditEvent, Cause, StateSnapshot};
use hirehive_domain::{AddressBook, InterviewDate, Person, PersonFilter, Tag};
use time::Date;
use tracing::debug;

/// Applies a command to the model.
///
/// Every precondition is checked before the first mutation, so a failed command
/// leaves the model exactly as it was. Each successful mutating command records
/// one audit event.
///
/// # Arguments
///
/// * `model` - The model to operate on
/// * `command` - The command to apply
/// * `cause` - The command text that produced `command`
/// * `today` - The current date, used to search for free interview dates
///
/// # Errors
///
/// Returns an error if:
/// - The target person is not in the displayed list, or the name is ambiguous
/// - The change would duplicate an existing record
/// - An interview is scheduled for an Offered or Rejected person
/// - The requested interview date is taken
/// - `undo` is run with no recorded change
#[allow(clippy::too_many_lines)]
pub fn apply(
    model: &mut Model,
    command: Command,
    cause: Cause,
    today: Date,
) -> Result<CommandResult, CommandError> {
    debug!(command = %command, "Applying command");
    match command {
        Command::Add { person } => {
            let before: StateSnapshot = snapshot(model);
            let feedback: String = messages::added(&person);
            model.add_person(person)?;
            record_change(model, cause, "AddPerson", &feedback, before);
            Ok(CommandResult::change(feedback))
        }
        Command::Edit { query, descriptor } => {
            let target: Person = resolve_target(model, &query)?;
            let edited: Person = create_edited_person(&target, &descriptor);
            if let Some(date) = descriptor.interview_date {
                ensure_date_free(model.address_book(), date, &target)?;
            }
            replace_person(model, cause, "EditPerson", &target, edited, messages::edited)
        }
        Command::Delete { query } => {
            let target: Person = resolve_target(model, &query)?;
            let before: StateSnapshot = snapshot(model);
            let removed: Person = model.delete_person(&target)?;
            let feedback: String = messages::deleted(&removed);
            record_change(model, cause, "DeletePerson", &feedback, before);
            Ok(CommandResult::change(feedback))
        }
        Command::Tag { query, tag } => {
            let target: Person = resolve_target(model, &query)?;
            let edited: Person = target.clone().with_tag(tag);
            replace_person(model, cause, "TagPerson", &target, edited, messages::tagged)
        }
        Command::Schedule { query, date } => {
            let target: Person = resolve_target(model, &query)?;
            let current_tag: Tag = target.tag();
            if !current_tag.is_schedulable() {
                return Err(CommandError::InvalidPerson {
                    name: target.name().value().to_string(),
                    tag: current_tag,
                });
            }
            let interview_date: InterviewDate = match date {
                Some(requested) => {
                    ensure_date_free(model.address_book(), requested, &target)?;
                    requested
                }
                None => model.available_date(today)?,
            };
            let descriptor: EditPersonDescriptor = EditPersonDescriptor {
                tag: Some(current_tag.after_scheduling()),
                interview_date: Some(interview_date),
                ..EditPersonDescriptor::default()
            };
            let edited: Person = create_edited_person(&target, &descriptor);
            replace_person(model, cause, "Schedule", &target, edited, messages::scheduled)
        }
        Command::Note { query } => {
            let target: Person = resolve_target(model, &query)?;
            Ok(CommandResult::note(messages::showing_note(&target), target))
        }
        Command::List => {
            model.update_filter(None);
            Ok(CommandResult::message(messages::MESSAGE_LIST_ALL.to_string()))
        }
        Command::Find { keywords } => {
            model.update_filter(Some(PersonFilter::NameKeywords(keywords)));
            Ok(CommandResult::message(messages::persons_listed(
                model.filtered_persons().len(),
            )))
        }
        Command::Filter { tag } => {
            let filter: PersonFilter = PersonFilter::Tag(tag);
            let description: String = filter.describe();
            model.update_filter(Some(filter));
            Ok(CommandResult::message(messages::persons_listed_matching(
                model.filtered_persons().len(),
                &description,
            )))
        }
        Command::Clear => {
            let before: StateSnapshot = snapshot(model);
            model.set_address_book(AddressBook::new());
            record_change(model, cause, "Clear", messages::MESSAGE_CLEAR, before);
            Ok(CommandResult::change(messages::MESSAGE_CLEAR.to_string()))
        }
        Command::Undo => {
            let reverted: AuditEvent = model.undo().ok_or(CommandError::NothingToUndo)?;
            debug!(
                action = %reverted.action.name,
                restored = %reverted.before.summary(),
                "Reverted change"
            );
            Ok(CommandResult::change(messages::undone(
                &reverted.cause.command_text,
            )))
        }
        Command::Help => Ok(CommandResult::help(messages::MESSAGE_SHOWING_HELP.to_string())),
        Command::Exit => Ok(CommandResult::exit(messages::MESSAGE_EXIT.to_string())),
    }
}

/// Finds the single displayed person `query` names.
fn resolve_target(model: &Model, query: &NameQuery) -> Result<Person, CommandError> {
    let displayed: Vec<&Person> = model.filtered_persons();
    Ok(query.resolve(&displayed)?.clone())
}

/// Fails if `date` is booked by anyone other than `target`.
fn ensure_date_free(
    address_book: &AddressBook,
    date: InterviewDate,
    target: &Person,
) -> Result<(), CommandError> {
    let holder: Option<&Person> = address_book
        .persons()
        .iter()
        .filter(|person| *person != target)
        .find(|person| person.interview_date() == Some(date));
    match holder {
        Some(person) => Err(CommandError::DateTaken {
            date,
            booked_by: person.name().value().to_string(),
        }),
        None => Ok(()),
    }
}

/// Replaces `target` with `edited` and records the change.
fn replace_person(
    model: &mut Model,
    cause: Cause,
    action_name: &str,
    target: &Person,
    edited: Person,
    feedback: fn(&Person) -> String,
) -> Result<CommandResult, CommandError> {
    let before: StateSnapshot = snapshot(model);
    let message: String = feedback(&edited);
    model.set_person(target, edited)?;
    record_change(model, cause, action_name, &message, before);
    Ok(CommandResult::change(message))
}

fn snapshot(model: &Model) -> StateSnapshot {
    StateSnapshot::new(model.address_book().clone())
}

fn record_change(
    model: &mut Model,
    cause: Cause,
    action_name: &str,
    details: &str,
    before: StateSnapshot,
) {
    let after: StateSnapshot = snapshot(model);
    debug!(
        action = action_name,
        before = %before.summary(),
        after = %after.summary(),
        "Recording change"
    );
    let action: Action = Action::new(action_name.to_string(), Some(details.to_string()));
    model.record(AuditEvent::new(cause, action, before, after));
}
