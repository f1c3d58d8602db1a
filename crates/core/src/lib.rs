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

mod apply;
mod command;
mod error;
mod logic;
pub mod messages;
mod model;
mod parser;
mod result;
mod syntax;
mod tokenizer;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, EditPersonDescriptor, NameQuery, create_edited_person};
pub use error::{CommandError, LogicError, ParseError};
pub use logic::{AddressBookStorage, Clock, FixedClock, Logic, SystemClock};
pub use model::Model;
pub use parser::parse_command;
pub use result::CommandResult;
pub use syntax::{
    PREFIX_ADDRESS, PREFIX_DATE, PREFIX_EMAIL, PREFIX_NAME, PREFIX_NOTE, PREFIX_PHONE,
    PREFIX_ROLE, PREFIX_TAG, Prefix,
};
pub use tokenizer::{ArgumentMultimap, tokenize};
