// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of the displayed list, notes and help.

use hirehive::Command;
use hirehive_domain::Person;
use std::path::Path;

/// Narrowest width the list wraps to, whatever the preferences say.
pub const MIN_WIDTH: usize = 40;

const INDENT: &str = "    ";

pub const MESSAGE_NO_PERSONS: &str = "No persons to show.";

/// Renders the displayed list, one numbered block per person.
#[must_use]
pub fn render_person_list(persons: &[&Person], width: usize) -> String {
    if persons.is_empty() {
        return MESSAGE_NO_PERSONS.to_string();
    }
    persons
        .iter()
        .enumerate()
        .map(|(index, person)| render_person(index + 1, person, width))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Renders one person as a header line followed by indented fields.
#[must_use]
pub fn render_person(number: usize, person: &Person, width: usize) -> String {
    let mut lines: Vec<String> = vec![format!(
        "{number}. {} [{}]",
        person.name(),
        person.tag()
    )];
    let mut fields: Vec<(&str, String)> = vec![
        ("Phone", person.phone().to_string()),
        ("Email", person.email().to_string()),
        ("Address", person.address().to_string()),
        ("Role", person.role().to_string()),
    ];
    if let Some(date) = person.interview_date() {
        fields.push(("Interview", date.to_string()));
    }
    if person.note().is_some() {
        fields.push(("Note", String::from("yes, see `note`")));
    }
    lines.extend(
        fields
            .into_iter()
            .map(|(label, value)| wrap(&format!("{label}: {value}"), width, INDENT)),
    );
    lines.join("\n")
}

/// Renders the note of `person`.
#[must_use]
pub fn render_note(person: &Person, width: usize) -> String {
    let body: String = person.note().map_or_else(
        || format!("{INDENT}(no note)"),
        |note| wrap(note.value(), width, INDENT),
    );
    format!("Note for {}:\n{body}", person.name())
}

/// Renders the usage of every command.
#[must_use]
pub fn render_help() -> String {
    Command::ALL_USAGES.join("\n\n")
}

/// Renders the line shown under the list.
#[must_use]
pub fn render_status_bar(shown: usize, total: usize, data_path: &Path) -> String {
    format!(
        "[{shown} of {total} persons shown | {}]",
        data_path.display()
    )
}

/// Greedily wraps `text` at word boundaries, prefixing every line with `indent`.
///
/// Words longer than a line are kept whole.
#[must_use]
pub fn wrap(text: &str, width: usize, indent: &str) -> String {
    let limit: usize = width.max(MIN_WIDTH).saturating_sub(indent.len());
    let mut lines: Vec<String> = Vec::new();
    let mut current: String = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > limit {
            lines.push(format!("{indent}{current}"));
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(format!("{indent}{current}"));
    lines.join("\n")
}
