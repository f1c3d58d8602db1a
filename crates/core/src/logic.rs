// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The entry point presentation layers drive: text in, result out.

use crate::apply::apply;
use crate::command::Command;
use crate::error::{CommandError, LogicError};
use crate::model::Model;
use crate::parser::parse_command;
use crate::result::CommandResult;
use hirehive_audit::Cause;
use hirehive_domain::{AddressBook, InterviewDate, Person};
use time::{Date, OffsetDateTime};
use tracing::{debug, info, warn};

/// Persists the address book after every change.
pub trait AddressBookStorage {
    type Error: std::fmt::Display;

    /// Writes the whole address book.
    ///
    /// # Errors
    ///
    /// Returns an error if the address book could not be written.
    fn save_address_book(&self, address_book: &AddressBook) -> Result<(), Self::Error>;
}

/// Supplies the current date for interview scheduling.
pub trait Clock {
    fn today(&self) -> Date;
}

/// The local calendar date, or the UTC date when the local offset is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// Parses, applies and persists commands.
#[derive(Debug)]
pub struct Logic<S, C> {
    model: Model,
    storage: S,
    clock: C,
}

impl<S: AddressBookStorage, C: Clock> Logic<S, C> {
    #[must_use]
    pub const fn new(model: Model, storage: S, clock: C) -> Self {
        Self {
            model,
            storage,
            clock,
        }
    }

    /// Executes one line of user input.
    ///
    /// A command that changes stored data is saved before returning. If the
    /// save fails the in-memory change is kept and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input does not parse
    /// - The command is rejected
    /// - The changed address book could not be saved
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        info!(command_text, "Executing command");
        let command: Command = parse_command(command_text)?;
        let cause: Cause = Cause::new(command_text.trim().to_string());
        let result: CommandResult = apply(&mut self.model, command, cause, self.clock.today())?;

        if result.is_change {
            self.storage
                .save_address_book(self.model.address_book())
                .map_err(|e| {
                    warn!(error = %e, "Failed to save address book");
                    LogicError::Storage {
                        message: e.to_string(),
                    }
                })?;
            debug!(persons = self.model.address_book().len(), "Address book saved");
        }
        Ok(result)
    }

    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub const fn address_book(&self) -> &AddressBook {
        self.model.address_book()
    }

    /// Returns the displayed list.
    #[must_use]
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    /// Returns the first date after today with no interview booked.
    ///
    /// # Errors
    ///
    /// Returns an error if the date search overflows the calendar.
    pub fn available_date(&self) -> Result<InterviewDate, LogicError> {
        self.model
            .available_date(self.clock.today())
            .map_err(|e| LogicError::Command(CommandError::from(e)))
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
