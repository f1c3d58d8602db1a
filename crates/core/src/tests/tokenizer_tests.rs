// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ArgumentMultimap, PREFIX_DATE, PREFIX_NAME, PREFIX_NOTE, PREFIX_PHONE, ParseError, Prefix,
    tokenize,
};

const PREFIXES: [Prefix; 4] = [PREFIX_NAME, PREFIX_PHONE, PREFIX_DATE, PREFIX_NOTE];

#[test]
fn test_preamble_is_text_before_first_prefix() {
    let multimap: ArgumentMultimap = tokenize("  Alice Tan  p/911 ", &PREFIXES);
    assert_eq!(multimap.preamble(), "Alice Tan");
    assert_eq!(multimap.value(PREFIX_PHONE), Some("911"));
}

#[test]
fn test_prefix_inside_a_word_is_not_a_prefix() {
    let multimap: ArgumentMultimap = tokenize(" n/Ann p/911 i/ask about chan/n/a", &PREFIXES);
    assert_eq!(multimap.value(PREFIX_NAME), Some("Ann"));
    assert_eq!(multimap.value(PREFIX_NOTE), Some("ask about chan/n/a"));
}

#[test]
fn test_date_prefix_is_not_confused_with_note_prefix() {
    let multimap: ArgumentMultimap = tokenize(" id/01/05/2025 i/bring portfolio", &PREFIXES);
    assert_eq!(multimap.value(PREFIX_DATE), Some("01/05/2025"));
    assert_eq!(multimap.value(PREFIX_NOTE), Some("bring portfolio"));
}

#[test]
fn test_empty_value_is_kept() {
    let multimap: ArgumentMultimap = tokenize(" i/", &PREFIXES);
    assert_eq!(multimap.value(PREFIX_NOTE), Some(""));
    assert!(multimap.has_all(&[PREFIX_NOTE]));
    assert!(!multimap.has_all(&[PREFIX_NOTE, PREFIX_NAME]));
}

#[test]
fn test_repeated_prefix_keeps_every_value() {
    let multimap: ArgumentMultimap = tokenize(" n/Ann n/Bob", &PREFIXES);
    assert_eq!(multimap.all_values(PREFIX_NAME), vec!["Ann", "Bob"]);
    assert_eq!(multimap.value(PREFIX_NAME), Some("Bob"));

    let result: Result<(), ParseError> = multimap.verify_no_duplicate_prefixes_for(&PREFIXES);
    assert_eq!(
        result,
        Err(ParseError::DuplicatePrefixes {
            prefixes: vec![String::from("n/")]
        })
    );
}
