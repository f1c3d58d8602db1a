// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interview date availability.
//!
//! ## Invariants
//!
//! - No two people share an interview date
//! - The search starts the day after `today`
//! - A person's own booking never blocks them from being rescheduled
//!
//! The search walks forward one day at a time. It always terminates: with `n`
//! dates booked, one of the first `n + 1` candidate days must be free.

use crate::error::DomainError;
use crate::types::{InterviewDate, Person};
use std::collections::HashSet;
use time::Date;

/// Collects every interview date booked in `persons`, skipping `excluding`.
#[must_use]
pub fn booked_dates(persons: &[Person], excluding: Option<&Person>) -> HashSet<InterviewDate> {
    persons
        .iter()
        .filter(|p| excluding != Some(*p))
        .filter_map(Person::interview_date)
        .collect()
}

/// Returns true if `date` is booked by a person other than `excluding`.
#[must_use]
pub fn is_date_booked(persons: &[Person], date: InterviewDate, excluding: Option<&Person>) -> bool {
    booked_dates(persons, excluding).contains(&date)
}

/// Finds the first interview date after `today` that nobody else has booked.
///
/// # Arguments
///
/// * `persons` - Every stored record (not just the displayed ones)
/// * `today` - The current date; the search starts the following day
/// * `excluding` - A record whose own booking should be ignored
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the search runs past the
/// last representable date.
pub fn next_available_date(
    persons: &[Person],
    today: Date,
    excluding: Option<&Person>,
) -> Result<InterviewDate, DomainError> {
    let booked: HashSet<InterviewDate> = booked_dates(persons, excluding);
    let mut candidate: Date = today;
    for _ in 0..=booked.len() {
        candidate = candidate
            .next_day()
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("searching for a free interview date after {today}"),
            })?;
        if !booked.contains(&InterviewDate::new(candidate)) {
            return Ok(InterviewDate::new(candidate));
        }
    }
    // Not reachable: one of the first booked.len() + 1 days is free.
    Err(DomainError::DateArithmeticOverflow {
        operation: format!("searching for a free interview date after {today}"),
    })
}
