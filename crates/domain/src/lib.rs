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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod address_book;
mod availability;
mod error;
mod filter;
mod sample;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use address_book::AddressBook;
pub use availability::{booked_dates, is_date_booked, next_available_date};
pub use error::DomainError;
pub use filter::{PersonFilter, contains_words_ignore_case};
pub use sample::{sample_address_book, sample_persons};
pub use types::{Address, Email, InterviewDate, Name, Note, Person, Phone, Role, Tag};
pub use validation::{
    is_valid_email, is_valid_free_text, is_valid_name, is_valid_phone, validate_person_unique,
};
