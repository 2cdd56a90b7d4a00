// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction-time configuration.
//!
//! Everything that shapes a match template lives here: the separator classes
//! the tokenizer splits on, the character classes fuzzed characters may take,
//! which mutations each term tier tolerates, and the two search knobs (the
//! out-of-order permutation limit and the ranking threshold).
//!
//! The defaults are empirically tuned cutoffs. Short terms are held to
//! stricter rules than long ones because a 3-letter term with a free
//! substitution matches nearly everything:
//!
//! | Stem length | Tolerated                                      |
//! |-------------|------------------------------------------------|
//! | 1-2         | exact only                                     |
//! | 3           | one adjacent transposition                     |
//! | 4           | one adjacent transposition or one insertion    |
//! | 5+          | one substitution, transposition, deletion, or insertion |
//!
//! Mutations never touch characters outside [`IntraSlice`], which by default
//! pins the first character. Without that pin "test" would happily match the
//! tail of "fittest".

use crate::error::{FuzzyError, Result};
use serde::{Deserialize, Serialize};

/// How a term may deviate from what was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum IntraMode {
    /// Up to `intra_ins` arbitrary characters between each pair of term chars.
    MultiInsert,
    /// At most one mutation per term, chosen from the tier's allowed set.
    #[default]
    SingleError,
}

/// Anchor placed after every non-final term, before the inter-term gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum InterBound {
    /// No anchor: terms may end anywhere.
    #[default]
    Any,
    /// Word boundary or underscore.
    Loose,
    /// Word boundary.
    Strict,
}

impl InterBound {
    pub(crate) fn pattern(self) -> &'static str {
        match self {
            InterBound::Any => "",
            InterBound::Loose => r"(?:\b|_)",
            InterBound::Strict => r"\b",
        }
    }
}

/// Character positions (within the fuzzable stem) where mutations may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntraSlice {
    pub start: usize,
    /// Exclusive end; `None` runs through the last character.
    pub end: Option<usize>,
}

impl Default for IntraSlice {
    fn default() -> Self {
        Self {
            start: 1,
            end: None,
        }
    }
}

impl IntraSlice {
    /// Clamp the slice to a stem of `len` characters.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let end = self.end.unwrap_or(len).min(len);
        (self.start.min(end), end)
    }
}

/// Collation used for the last ranking tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Collation {
    /// Case- and accent-insensitive first, then lowercase before uppercase.
    #[default]
    Natural,
    /// Raw Unicode scalar order.
    Codepoint,
}

/// Engine configuration. Immutable once handed to [`crate::Fuzzy::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuzzyConfig {
    /// Runs of characters separating words.
    pub inter_split: String,
    /// Pairs where a camelCase word splits in two.
    pub intra_split: String,
    /// Pairs forming a weak boundary inside a word.
    pub intra_bound: String,
    /// Class of characters allowed between terms.
    pub inter_chars: String,
    /// Max characters between terms; `None` is unbounded.
    pub inter_ins: Option<usize>,
    pub inter_bound: InterBound,
    /// Class of characters a substitution or insertion may introduce.
    pub intra_chars: String,
    /// Trailing contraction split off a term and matched literally.
    pub intra_contr: String,
    pub intra_mode: IntraMode,
    /// SingleError: nonzero enables one insertion. MultiInsert: per-gap limit.
    pub intra_ins: usize,
    pub intra_sub: bool,
    pub intra_trn: bool,
    pub intra_del: bool,
    pub intra_slice: IntraSlice,
    /// Max term count for permuted search; 0 disables it.
    pub out_of_order_limit: usize,
    /// Above this many matches, results are returned unscored.
    pub info_thresh: usize,
    pub collation: Collation,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            inter_split: "[^A-Za-z0-9']+".to_string(),
            intra_split: "[a-z][A-Z]".to_string(),
            intra_bound: "[A-Za-z][0-9]|[0-9][A-Za-z]|[a-z][A-Z]".to_string(),
            inter_chars: ".".to_string(),
            inter_ins: None,
            inter_bound: InterBound::Any,
            intra_chars: "[a-z0-9']".to_string(),
            intra_contr: r"'[a-z]{1,2}\b".to_string(),
            intra_mode: IntraMode::SingleError,
            intra_ins: 1,
            intra_sub: true,
            intra_trn: true,
            intra_del: true,
            intra_slice: IntraSlice::default(),
            out_of_order_limit: 5,
            info_thresh: 1000,
            collation: Collation::Natural,
        }
    }
}

impl FuzzyConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject slices that can never select a character.
    pub fn validate(&self) -> Result<()> {
        if let Some(end) = self.intra_slice.end {
            if self.intra_slice.start >= end {
                return Err(FuzzyError::InvalidSlice {
                    start: self.intra_slice.start,
                    end,
                });
            }
        }
        Ok(())
    }
}
