// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use hirehive_domain::AddressBook;
use std::collections::VecDeque;

#[cfg(test)]
mod tests;

/// Represents the reason for an action: the command text the user entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// The raw command text.
    pub command_text: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `command_text` - The command line that triggered this action
    #[must_use]
    pub const fn new(command_text: String) -> Self {
        Self { command_text }
    }
}

/// Represents the specific action performed.
///
/// An action describes what state change occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AddPerson`", "`Schedule`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A full copy of the address book at a point in time.
///
/// The collection holds at most a few hundred records, so whole copies are kept
/// instead of diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// The records at the time of the snapshot.
    pub address_book: AddressBook,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(address_book: AddressBook) -> Self {
        Self { address_book }
    }

    /// Summarises the snapshot for log output.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("persons_count={}", self.address_book.len())
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful mutating command produces exactly one audit event.
/// Audit events capture:
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The state before the transition (before)
/// - The state after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    #[must_use]
    pub const fn new(
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            cause,
            action,
            before,
            after,
        }
    }
}

/// A bounded, most-recent-last history of audit events.
///
/// When full, recording a new event evicts the oldest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLog {
    events: VecDeque<AuditEvent>,
    capacity: usize,
}

impl AuditLog {
    /// How many events are kept by default.
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Creates an empty log holding at most `capacity` events (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity: usize = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an event, evicting the oldest if the log is full.
    pub fn record(&mut self, event: AuditEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Removes and returns the most recent event.
    pub fn pop_latest(&mut self) -> Option<AuditEvent> {
        self.events.pop_back()
    }

    /// Returns the most recent event without removing it.
    #[must_use]
    pub fn latest(&self) -> Option<&AuditEvent> {
        self.events.back()
    }

    /// Iterates events oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &AuditEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}
