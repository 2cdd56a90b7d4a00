// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Needle tokenization.
//!
//! The order of operations matters:
//!
//! 1. Quoted phrases are swapped for a placeholder so nothing below can
//!    split or case-fold them.
//! 2. Separator runs are trimmed from both ends.
//! 3. camelCase humps get a space inserted. This has to run before
//!    case-folding, or there'd be no uppercase left to detect.
//! 4. Everything is lowercased and split on separator runs.
//! 5. Placeholders are swapped back for their phrases, in order.
//!
//! Negations (`-word`, `-"some phrase"`) are pulled out of the needle before
//! any of this, by [`Fuzzy::parse`].

use super::term::Term;
use crate::engine::Fuzzy;
use crate::error::{FuzzyError, Result};
use regex::{Captures, Regex};
use tracing::trace;

/// Stand-in for a quoted phrase. Lowercase letters only, so it survives
/// case-folding and every default separator class untouched.
const EXACT_HERE: &str = "eexxaacctt";

/// A needle broken into positive terms and negations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNeedle {
    pub terms: Vec<Term>,
    /// Regex-escaped stems of negated words and phrases.
    pub negations: Vec<String>,
}

impl ParsedNeedle {
    /// Case-insensitive alternation over all negations, if there are any.
    pub fn negation_regex(&self) -> Result<Option<Regex>> {
        if self.negations.is_empty() {
            return Ok(None);
        }
        let pattern = format!("(?i){}", self.negations.join("|"));
        Regex::new(&pattern)
            .map(Some)
            .map_err(|source| FuzzyError::Template { source })
    }
}

impl Fuzzy {
    /// Split a needle into term strings.
    ///
    /// Quoted phrases come back as single terms with their quotes stripped.
    /// Negation markers are not interpreted here.
    pub fn split(&self, needle: &str) -> Vec<String> {
        self.tokenize(needle)
            .into_iter()
            .map(|term| match term {
                Term::Word(s) | Term::Exact(s) => s,
            })
            .collect()
    }

    /// Split a needle into typed terms.
    pub fn tokenize(&self, needle: &str) -> Vec<Term> {
        let cache = &self.cache;

        let mut exacts: Vec<String> = Vec::new();
        let needle = cache.exacts.replace_all(needle, |caps: &Captures<'_>| {
            let quoted = &caps[0];
            exacts.push(quoted[1..quoted.len() - 1].to_string());
            format!(" {} ", EXACT_HERE)
        });

        let needle = cache.trim.replace_all(&needle, "");

        let needle = cache.intra_split.replace_all(&needle, |caps: &Captures<'_>| {
            let hump = &caps[0];
            let mut chars = hump.chars();
            match chars.next() {
                Some(first) => format!("{} {}", first, chars.as_str()),
                None => String::new(),
            }
        });

        let needle = needle.to_lowercase();

        let mut exacts = exacts.into_iter();
        let terms: Vec<Term> = cache
            .inter_split
            .split(&needle)
            .filter(|t| !t.is_empty())
            .map(|t| {
                if t == EXACT_HERE {
                    if let Some(phrase) = exacts.next() {
                        return Term::Exact(phrase);
                    }
                }
                Term::Word(t.to_string())
            })
            .collect();

        trace!(?terms, "tokenized needle");
        terms
    }

    /// Pull negations out of a needle, then tokenize what remains.
    pub fn parse(&self, needle: &str) -> ParsedNeedle {
        let mut negations = Vec::new();
        let rest = self
            .cache
            .negations
            .replace_all(needle, |caps: &Captures<'_>| {
                let stem = caps[0].trim_start();
                let stem = &stem[1..];
                let stem = stem
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(stem);
                negations.push(regex::escape(stem));
                ""
            });

        ParsedNeedle {
            terms: self.tokenize(&rest),
            negations,
        }
    }
}
