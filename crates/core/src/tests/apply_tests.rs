// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_tagged_person, create_test_model, create_test_person, run};
use crate::{
    CommandError, CommandResult, EditPersonDescriptor, Model, create_edited_person,
};
use hirehive_audit::AuditEvent;
use hirehive_domain::{AddressBook, DomainError, InterviewDate, Note, Person, Tag};
use time::macros::date;

const ADD_ALICE: &str =
    "add n/Alice Tan p/98765432 e/alicetan@example.com a/311, Clementi Ave 2, #02-25 r/Data Analyst";

fn displayed_names(model: &Model) -> Vec<String> {
    model
        .filtered_persons()
        .iter()
        .map(|person| person.name().value().to_string())
        .collect()
}

#[test]
fn test_add_inserts_applicant_and_records_event() {
    let mut model: Model = Model::new();

    let result: CommandResult = run(&mut model, ADD_ALICE).unwrap();

    assert!(result.is_change);
    assert!(result.feedback.starts_with("New person added: Alice Tan"));
    assert!(model.has_person(&create_test_person("Alice Tan")));
    assert_eq!(model.address_book().persons()[0].tag(), Tag::Applicant);

    let event: &AuditEvent = model.history().latest().unwrap();
    assert_eq!(event.action.name, "AddPerson");
    assert_eq!(event.cause.command_text, ADD_ALICE);
    assert!(event.before.address_book.is_empty());
    assert_eq!(event.after.address_book.len(), 1);
}

#[test]
fn test_add_duplicate_is_rejected() {
    let mut model: Model = create_test_model(vec![create_test_person("Alice Tan")]);

    let result: Result<CommandResult, CommandError> = run(&mut model, ADD_ALICE);

    assert_eq!(
        result,
        Err(CommandError::DomainViolation(DomainError::DuplicatePerson {
            name: String::from("Alice Tan")
        }))
    );
    assert_eq!(model.address_book().len(), 1);
    assert!(model.history().is_empty());
}

#[test]
fn test_add_then_delete_restores_collection() {
    let mut model: Model = create_test_model(vec![create_test_person("Bob")]);
    let before: AddressBook = model.address_book().clone();

    run(&mut model, ADD_ALICE).unwrap();
    run(&mut model, "delete n/alice tan").unwrap();

    assert_eq!(model.address_book(), &before);
}

#[test]
fn test_delete_unknown_name() {
    let mut model: Model = create_test_model(vec![create_test_person("Bob")]);

    let result: Result<CommandResult, CommandError> = run(&mut model, "delete n/Carol");

    assert_eq!(
        result,
        Err(CommandError::DomainViolation(DomainError::PersonNotFound {
            name: String::from("Carol")
        }))
    );
}

#[test]
fn test_name_with_several_matches_is_ambiguous() {
    let twin: Person = create_test_person("Bob").with_tag(Tag::Candidate);
    let mut model: Model = create_test_model(vec![create_test_person("Bob"), twin]);

    let result: Result<CommandResult, CommandError> = run(&mut model, "delete n/Bob");

    assert_eq!(
        result,
        Err(CommandError::DomainViolation(DomainError::AmbiguousName {
            name: String::from("Bob"),
            matches: 2,
        }))
    );

    run(&mut model, "filter t/Candidate").unwrap();
    run(&mut model, "delete n/Bob").unwrap();
    assert_eq!(model.address_book().persons()[0].tag(), Tag::Applicant);
}

#[test]
fn test_commands_only_target_displayed_persons() {
    let mut model: Model = create_test_model(vec![
        create_test_person("Alice Tan"),
        create_test_person("Bob"),
    ]);
    run(&mut model, "find bob").unwrap();

    let result: Result<CommandResult, CommandError> = run(&mut model, "delete n/Alice Tan");

    assert!(matches!(
        result,
        Err(CommandError::DomainViolation(DomainError::PersonNotFound { .. }))
    ));
}

#[test]
fn test_edit_replaces_in_place() {
    let mut model: Model = create_test_model(vec![
        create_test_person("Alice Tan"),
        create_test_person("Bob"),
    ]);

    let result: CommandResult = run(&mut model, "edit alice tan n/Alice Lim p/91234567").unwrap();

    assert!(result.feedback.starts_with("Edited Person: Alice Lim; Phone: 91234567"));
    assert_eq!(displayed_names(&model), vec!["Alice Lim", "Bob"]);
    assert_eq!(model.history().latest().unwrap().action.name, "EditPerson");
}

#[test]
fn test_edit_to_existing_record_is_duplicate() {
    let mut model: Model = create_test_model(vec![
        create_test_person("Alice Tan"),
        create_test_person("Bob"),
    ]);

    let result: Result<CommandResult, CommandError> =
        run(&mut model, "edit Alice Tan n/Bob e/bob@example.com");

    assert!(matches!(
        result,
        Err(CommandError::DomainViolation(DomainError::DuplicatePerson { .. }))
    ));
    assert_eq!(displayed_names(&model), vec!["Alice Tan", "Bob"]);
}

#[test]
fn test_edit_to_same_values_is_identity() {
    let alice: Person = create_test_person("Alice Tan");
    let mut model: Model = create_test_model(vec![alice.clone()]);

    run(&mut model, "edit Alice Tan p/98765432").unwrap();

    assert_eq!(model.address_book().persons(), &[alice]);
}

#[test]
fn test_empty_descriptor_yields_equal_record() {
    let person: Person = create_test_person("Alice Tan")
        .with_tag(Tag::Interviewee)
        .with_interview_date(Some(InterviewDate::new(date!(2025 - 06 - 02))))
        .with_note(Some(Note::new("Strong referral")));

    let edited: Person = create_edited_person(&person, &EditPersonDescriptor::default());

    assert_eq!(edited, person);
}

#[test]
fn test_edit_sets_and_clears_note() {
    let mut model: Model = create_test_model(vec![create_test_person("Alice Tan")]);

    run(&mut model, "edit Alice Tan i/Prefers mornings").unwrap();
    assert_eq!(
        model.address_book().persons()[0].note(),
        Some(&Note::new("Prefers mornings"))
    );

    run(&mut model, "edit Alice Tan i/").unwrap();
    assert_eq!(model.address_book().persons()[0].note(), None);
}

#[test]
fn test_tag_moves_person_to_stage() {
    let mut model: Model = create_test_model(vec![create_test_person("Alice Tan")]);

    let result: CommandResult = run(&mut model, "tag n/Alice Tan t/offered").unwrap();

    assert_eq!(result.feedback, "Tagged Alice Tan as Offered");
    assert_eq!(model.address_book().persons()[0].tag(), Tag::Offered);
}

#[test]
fn test_note_shows_person_without_change() {
    let noted: Person = create_test_person("Alice Tan").with_note(Some(Note::new("Ex-intern")));
    let mut model: Model = create_test_model(vec![noted.clone()]);

    let result: CommandResult = run(&mut model, "note n/Alice Tan").unwrap();

    assert!(result.show_note);
    assert!(!result.is_change);
    assert_eq!(result.noted_person, Some(noted));
    assert!(model.history().is_empty());
}

#[test]
fn test_find_matches_whole_words_only() {
    let mut model: Model = create_test_model(vec![
        create_test_person("John Lee"),
        create_test_person("Johnny Appleseed"),
        create_test_person("Mary John"),
    ]);

    let result: CommandResult = run(&mut model, "find JOHN").unwrap();

    assert_eq!(result.feedback, "2 persons listed!");
    assert_eq!(displayed_names(&model), vec!["John Lee", "Mary John"]);
}

#[test]
fn test_filter_then_list() {
    let mut model: Model = create_test_model(vec![
        create_tagged_person("Alice", Tag::Offered),
        create_tagged_person("Bob", Tag::Applicant),
    ]);

    let result: CommandResult = run(&mut model, "filter t/offered").unwrap();
    assert_eq!(result.feedback, "1 persons listed with tag Offered!");
    assert_eq!(displayed_names(&model), vec!["Alice"]);

    run(&mut model, "list").unwrap();
    assert_eq!(displayed_names(&model), vec!["Alice", "Bob"]);
    assert_eq!(model.filter(), None);
}

#[test]
fn test_clear_succeeds_on_empty_and_populated_books() {
    let mut empty: Model = Model::new();
    assert!(run(&mut empty, "clear").unwrap().is_change);
    assert!(empty.address_book().is_empty());

    let mut populated: Model = create_test_model(vec![create_test_person("Alice Tan")]);
    run(&mut populated, "clear").unwrap();
    assert!(populated.address_book().is_empty());
}

#[test]
fn test_undo_reverts_latest_change() {
    let mut model: Model = create_test_model(vec![create_test_person("Bob")]);
    let before: AddressBook = model.address_book().clone();

    run(&mut model, ADD_ALICE).unwrap();
    run(&mut model, "find alice").unwrap();
    let result: CommandResult = run(&mut model, "undo").unwrap();

    assert!(result.is_change);
    assert_eq!(result.feedback, format!("Undid: {ADD_ALICE}"));
    assert_eq!(model.address_book(), &before);
    assert_eq!(model.filter(), None);
    assert!(model.history().is_empty());
}

#[test]
fn test_undo_walks_back_several_changes() {
    let mut model: Model = create_test_model(vec![create_test_person("Bob")]);
    let before: AddressBook = model.address_book().clone();

    run(&mut model, "tag n/Bob t/Candidate").unwrap();
    run(&mut model, "clear").unwrap();
    run(&mut model, "undo").unwrap();
    assert_eq!(model.address_book().persons()[0].tag(), Tag::Candidate);
    run(&mut model, "undo").unwrap();
    assert_eq!(model.address_book(), &before);
}

#[test]
fn test_undo_without_history_fails() {
    let mut model: Model = Model::new();
    assert_eq!(run(&mut model, "undo"), Err(CommandError::NothingToUndo));
}

#[test]
fn test_help_and_exit_set_flags_only() {
    let mut model: Model = Model::new();

    let help: CommandResult = run(&mut model, "help").unwrap();
    assert!(help.show_help);
    assert!(!help.is_change);

    let exit: CommandResult = run(&mut model, "exit").unwrap();
    assert!(exit.exit);
    assert!(!exit.is_change);
}
