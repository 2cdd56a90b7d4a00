// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terms: the units a needle is split into.

use regex::Regex;

/// One tokenized unit of a needle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A case-folded word. May still carry a contraction suffix.
    Word(String),
    /// A quoted phrase, quotes stripped, matched literally with no fuzz.
    Exact(String),
}

impl Term {
    pub fn text(&self) -> &str {
        match self {
            Term::Word(s) | Term::Exact(s) => s,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Term::Exact(_))
    }

    /// Length in chars, used to order terms for out-of-order narrowing.
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }
}

/// Split a trailing contraction (`'s`, `'ll`, `'t`) off a word.
///
/// Every match is removed from the stem; the last one becomes the suffix.
/// Returns `(stem, suffix)` with an empty suffix when there is none.
pub(crate) fn split_contraction(word: &str, contraction: &Regex) -> (String, String) {
    let mut suffix = String::new();
    let stem = contraction.replace_all(word, |caps: &regex::Captures<'_>| {
        suffix = caps[0].to_string();
        ""
    });
    (stem.into_owned(), suffix)
}
