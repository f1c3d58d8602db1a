// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Filters that derive the displayed person list from the address book.

use crate::types::{Person, Tag};

/// A boolean test over a person.
///
/// The set of filters is closed; each variant carries its own parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonFilter {
    /// Name contains the keywords as a run of whole words, ignoring case.
    NameKeywords(String),
    /// Tag equals the given tag.
    Tag(Tag),
}

impl PersonFilter {
    /// Tests a person against this filter.
    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::NameKeywords(keywords) => contains_words_ignore_case(person.name().value(), keywords),
            Self::Tag(tag) => person.tag() == *tag,
        }
    }

    /// Describes the filter for the feedback shown after it is applied.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::NameKeywords(keywords) => format!("name matching \"{keywords}\""),
            Self::Tag(tag) => format!("tag {tag}"),
        }
    }
}

impl std::fmt::Display for PersonFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameKeywords(keywords) => write!(f, "NameKeywords{{keywords={keywords}}}"),
            Self::Tag(tag) => write!(f, "Tag{{tag={tag}}}"),
        }
    }
}

/// Returns true if `sentence` contains `words` as consecutive whole words.
///
/// Comparison ignores ASCII case. "john" matches "John Lee" but not
/// "Johnny Appleseed". Blank `words` never match.
#[must_use]
pub fn contains_words_ignore_case(sentence: &str, words: &str) -> bool {
    let needle: Vec<&str> = words.split_whitespace().collect();
    if needle.is_empty() {
        return false;
    }
    let haystack: Vec<&str> = sentence.split_whitespace().collect();
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(word, keyword)| word.eq_ignore_ascii_case(keyword))
    })
}
