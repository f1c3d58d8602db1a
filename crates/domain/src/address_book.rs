// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Person;
use crate::validation::validate_person_unique;

/// The ordered collection of every stored person.
///
/// Order is insertion order; edits keep a record at its position.
/// No two records are fully equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    /// Creates an empty address book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persons: Vec::new(),
        }
    }

    /// Builds an address book from a list of records, in order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicatePerson` if two records are identical.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, DomainError> {
        let mut book: Self = Self::new();
        for person in persons {
            book.add(person)?;
        }
        Ok(book)
    }

    /// Returns all records in order.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Returns true if an identical record is stored.
    #[must_use]
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicatePerson` if an identical record is already stored.
    pub fn add(&mut self, person: Person) -> Result<(), DomainError> {
        validate_person_unique(&person, &self.persons)?;
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `target` is not stored
    /// - `edited` differs from `target` and is identical to another stored record
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), DomainError> {
        let index: usize = self.position_of(target)?;
        if target != &edited {
            validate_person_unique(&edited, &self.persons)?;
        }
        self.persons[index] = edited;
        Ok(())
    }

    /// Removes `target`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PersonNotFound` if `target` is not stored.
    pub fn remove(&mut self, target: &Person) -> Result<Person, DomainError> {
        let index: usize = self.position_of(target)?;
        Ok(self.persons.remove(index))
    }

    fn position_of(&self, target: &Person) -> Result<usize, DomainError> {
        self.persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| DomainError::PersonNotFound {
                name: target.name().value().to_string(),
            })
    }
}
