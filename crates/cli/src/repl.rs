// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::render::{render_help, render_note, render_person_list, render_status_bar};
use color_eyre::Result;
use hirehive::{AddressBookStorage, Clock, CommandResult, Logic, LogicError, messages};
use hirehive_domain::Person;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const PROMPT: &str = "hirehive> ";

/// Presentation settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub list_width: usize,
    pub data_path: PathBuf,
}

/// What to print after one line of input, and whether to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub exit: bool,
}

/// Renders the displayed list followed by the status bar.
#[must_use]
pub fn render_list_view<S: AddressBookStorage, C: Clock>(
    logic: &Logic<S, C>,
    screen: &Screen,
) -> String {
    let displayed: Vec<&Person> = logic.filtered_persons();
    format!(
        "{}\n{}",
        render_person_list(&displayed, screen.list_width),
        render_status_bar(displayed.len(), logic.address_book().len(), &screen.data_path)
    )
}

/// Executes one line and renders its result.
pub fn handle_line<S: AddressBookStorage, C: Clock>(
    logic: &mut Logic<S, C>,
    line: &str,
    screen: &Screen,
) -> Outcome {
    match logic.execute(line) {
        Ok(result) => Outcome {
            output: render_result(logic, &result, screen),
            exit: result.exit,
        },
        Err(e) => {
            if matches!(e, LogicError::Storage { .. }) {
                warn!(error = %e, "Command applied but not saved");
            } else {
                debug!(error = %e, "Command rejected");
            }
            Outcome {
                output: e.to_string(),
                exit: false,
            }
        }
    }
}

fn render_result<S: AddressBookStorage, C: Clock>(
    logic: &Logic<S, C>,
    result: &CommandResult,
    screen: &Screen,
) -> String {
    let mut output: String = result.feedback.clone();
    if result.is_change {
        output.push_str(messages::MESSAGE_DATA_SAVED);
    }
    if result.exit {
        return output;
    }
    if result.show_help {
        output.push_str("\n\n");
        output.push_str(&render_help());
    } else if let Some(person) = result.noted_person.as_ref().filter(|_| result.show_note) {
        output.push('\n');
        output.push_str(&render_note(person, screen.list_width));
    } else {
        output.push_str("\n\n");
        output.push_str(&render_list_view(logic, screen));
    }
    output
}

/// Reads commands until `exit`, end of input, or a terminal error.
///
/// # Errors
///
/// Returns an error if the line editor cannot be created.
pub fn run<S: AddressBookStorage, C: Clock>(
    logic: &mut Logic<S, C>,
    screen: &Screen,
    welcome: &str,
) -> Result<()> {
    let mut editor: DefaultEditor = DefaultEditor::new()?;
    println!("{welcome}\n\n{}", render_list_view(logic, screen));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed: &str = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                let outcome: Outcome = handle_line(logic, trimmed, screen);
                println!("{}", outcome.output);
                if outcome.exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Type 'exit' to quit.");
            }
            Err(ReadlineError::Eof) => {
                info!("End of input");
                break;
            }
            Err(e) => {
                warn!(error = %e, "Line editor failed");
                break;
            }
        }
    }
    Ok(())
}
