// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hirehive_audit::{AuditEvent, AuditLog};
use hirehive_domain::{AddressBook, DomainError, InterviewDate, Person, PersonFilter, next_available_date};
use time::Date;

/// The in-memory state the commands operate on.
///
/// Owns the address book, the filter deriving the displayed list, and the
/// history of changes used by `undo`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    address_book: AddressBook,
    filter: Option<PersonFilter>,
    history: AuditLog,
}

impl Model {
    /// Creates a model with an empty address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model over an existing address book, showing every person.
    #[must_use]
    pub fn with_address_book(address_book: AddressBook) -> Self {
        Self {
            address_book,
            filter: None,
            history: AuditLog::default(),
        }
    }

    #[must_use]
    pub const fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replaces the whole address book.
    pub fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book = address_book;
    }

    /// Returns true if an identical record is stored.
    #[must_use]
    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.contains(person)
    }

    /// Adds a person.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicatePerson` if an identical record exists.
    pub fn add_person(&mut self, person: Person) -> Result<(), DomainError> {
        self.address_book.add(person)
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is missing or `edited` duplicates another record.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), DomainError> {
        self.address_book.set_person(target, edited)
    }

    /// Removes `target`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PersonNotFound` if `target` is not stored.
    pub fn delete_person(&mut self, target: &Person) -> Result<Person, DomainError> {
        self.address_book.remove(target)
    }

    /// Sets the filter deriving the displayed list. `None` shows everyone.
    pub fn update_filter(&mut self, filter: Option<PersonFilter>) {
        self.filter = filter;
    }

    #[must_use]
    pub const fn filter(&self) -> Option<&PersonFilter> {
        self.filter.as_ref()
    }

    /// Returns the displayed list: every stored person passing the active filter,
    /// in address book order.
    #[must_use]
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|person| self.filter.as_ref().is_none_or(|filter| filter.matches(person)))
            .collect()
    }

    /// Returns the first date after `today` with no interview booked by anyone.
    ///
    /// Searches the whole address book, not just the displayed list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the search runs out of dates.
    pub fn available_date(&self, today: Date) -> Result<InterviewDate, DomainError> {
        next_available_date(self.address_book.persons(), today, None)
    }

    /// Records a completed change.
    pub fn record(&mut self, event: AuditEvent) {
        self.history.record(event);
    }

    #[must_use]
    pub const fn history(&self) -> &AuditLog {
        &self.history
    }

    /// Reverts the most recent recorded change and shows every person.
    ///
    /// Returns the reverted event, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<AuditEvent> {
        let event: AuditEvent = self.history.pop_latest()?;
        self.address_book = event.before.address_book.clone();
        self.filter = None;
        Some(event)
    }
}
