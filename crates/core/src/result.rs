// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hirehive_domain::Person;

/// The outcome of a successful command, for the presentation layer.
///
/// The flags ask the presenter for side effects instead of the command
/// reaching into the user interface itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Feedback shown to the user.
    pub feedback: String,
    /// The help screen should be shown.
    pub show_help: bool,
    /// The application should quit.
    pub exit: bool,
    /// The note of `noted_person` should be shown.
    pub show_note: bool,
    /// Stored data changed and has to be saved.
    pub is_change: bool,
    /// The person whose note to show.
    pub noted_person: Option<Person>,
}

impl CommandResult {
    /// A query result: feedback only.
    #[must_use]
    pub const fn message(feedback: String) -> Self {
        Self {
            feedback,
            show_help: false,
            exit: false,
            show_note: false,
            is_change: false,
            noted_person: None,
        }
    }

    /// A result for a command that changed stored data.
    #[must_use]
    pub fn change(feedback: String) -> Self {
        Self {
            is_change: true,
            ..Self::message(feedback)
        }
    }

    /// A result asking for the help screen.
    #[must_use]
    pub fn help(feedback: String) -> Self {
        Self {
            show_help: true,
            ..Self::message(feedback)
        }
    }

    /// A result asking the application to quit.
    #[must_use]
    pub fn exit(feedback: String) -> Self {
        Self {
            exit: true,
            ..Self::message(feedback)
        }
    }

    /// A result asking for `person`'s note to be shown.
    #[must_use]
    pub fn note(feedback: String, person: Person) -> Self {
        Self {
            show_note: true,
            noted_person: Some(person),
            ..Self::message(feedback)
        }
    }
}
