// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for engine construction and template compilation.
//!
//! Degenerate needles are not errors. An empty needle, a negation-only
//! needle, or an out-of-order request past the permutation limit all come
//! back as ordinary results with `None` in the relevant slots. What lands
//! here is configuration that can't be compiled, or a needle so large the
//! regex engine refuses to build its automaton.

use thiserror::Error;

/// Everything that can go wrong building or running a [`crate::Fuzzy`].
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// A configured character class or separator pattern failed to compile.
    #[error("invalid `{field}` pattern: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The interior mutation slice selects no characters.
    #[error("intra slice {start}..{end} is empty")]
    InvalidSlice { start: usize, end: usize },

    /// A needle template could not be compiled (usually the size limit).
    #[error("failed to compile match template: {source}")]
    Template {
        #[source]
        source: regex::Error,
    },

    /// A configuration document failed to parse.
    #[error("invalid configuration: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
