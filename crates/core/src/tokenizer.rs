// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Splits argument text into a preamble and prefixed values.
//!
//! A prefix only counts when it starts the argument text or follows
//! whitespace, so `n/` inside `john.n/a` is part of a value. Each value runs
//! until the next recognised prefix or the end of the text and is trimmed.

use crate::error::ParseError;
use crate::syntax::Prefix;
use std::collections::HashMap;

/// Prefixed values and preamble of one command's argument text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the unprefixed text before the first prefix, trimmed.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value given for `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns every value given for `prefix`, in input order.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns true if every prefix in `prefixes` has at least one value.
    #[must_use]
    pub fn has_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.values.contains_key(prefix))
    }

    /// Checks that none of `prefixes` was given more than once.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DuplicatePrefixes` listing every repeated prefix.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|&&prefix| {
                self.values
                    .get(&prefix)
                    .is_some_and(|values| values.len() > 1)
            })
            .map(ToString::to_string)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes {
                prefixes: duplicated,
            })
        }
    }
}

/// Tokenizes `args` against the prefixes a command recognises.
///
/// # Arguments
///
/// * `args` - Everything after the command word
/// * `prefixes` - The prefixes the command accepts
#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .filter(|&(index, _)| starts_token(args, index))
                .map(move |(index, _)| (index, prefix))
        })
        .collect();
    positions.sort_unstable();

    let preamble_end: usize = positions.first().map_or(args.len(), |&(index, _)| index);
    let mut multimap: ArgumentMultimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, &(start, prefix)) in positions.iter().enumerate() {
        let value_start: usize = start + prefix.as_str().len();
        let value_end: usize = positions.get(i + 1).map_or(args.len(), |&(next, _)| next);
        multimap
            .values
            .entry(prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }
    multimap
}

/// Returns true if position `index` of `args` begins a whitespace-delimited token.
fn starts_token(args: &str, index: usize) -> bool {
    args[..index]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace)
}
