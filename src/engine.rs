// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine instance and its compiled-pattern cache.
//!
//! All the fixed regexes the pipeline needs (quote extraction, negation
//! extraction, separator splitting, boundary tests) depend only on the
//! configuration, so they are compiled exactly once in [`Fuzzy::new`] and
//! owned by the instance. Per-needle templates are built fresh on every call.
//!
//! The operations themselves live next to their components:
//! `split` in [`crate::query`], `filter` and `search` in [`crate::search`],
//! `info` and `rank` in [`crate::scoring`].

use crate::config::FuzzyConfig;
use crate::error::{FuzzyError, Result};
use regex::Regex;

/// Regexes derived from a [`FuzzyConfig`], compiled once per engine.
#[derive(Debug, Clone)]
pub struct PatternCache {
    /// Double-quoted exact phrases.
    pub(crate) exacts: Regex,
    /// `-word` / `-"phrase"` at string start or after whitespace.
    pub(crate) negations: Regex,
    /// Separator runs at either end of the needle.
    pub(crate) trim: Regex,
    pub(crate) inter_split: Regex,
    pub(crate) intra_split: Regex,
    pub(crate) contraction: Regex,
    /// Strong-boundary test for a single character.
    pub(crate) inter_bound: Regex,
    /// Weak-boundary test for a pair of characters.
    pub(crate) intra_bound: Regex,
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| FuzzyError::InvalidPattern { field, source })
}

impl PatternCache {
    pub fn new(config: &FuzzyConfig) -> Result<Self> {
        // Classes that are only ever spliced into templates still get
        // compiled alone, so a typo surfaces here rather than mid-search.
        compile("intraChars", &config.intra_chars)?;
        compile("interChars", &config.inter_chars)?;

        Ok(Self {
            exacts: compile("exacts", r#"".+?""#)?,
            negations: compile(
                "intraChars",
                &format!(r#"(?i)(?:\s+|^)-(?:{}+|".+?")"#, config.intra_chars),
            )?,
            trim: compile(
                "interSplit",
                &format!("^(?:{0})|(?:{0})$", config.inter_split),
            )?,
            inter_split: compile("interSplit", &config.inter_split)?,
            intra_split: compile("intraSplit", &config.intra_split)?,
            contraction: compile("intraContr", &format!("(?i){}", config.intra_contr))?,
            inter_bound: compile("interSplit", &config.inter_split)?,
            intra_bound: compile("intraBound", &config.intra_bound)?,
        })
    }
}

/// A configured fuzzy matcher.
///
/// Cheap to share by reference: every method takes `&self` and keeps no state
/// between calls.
///
/// ```ignore
/// let fuzzy = Fuzzy::new(FuzzyConfig::default())?;
/// let haystack = ["test manager", "manifest"];
/// let result = fuzzy.search(&haystack, "man test")?;
/// ```
#[derive(Debug, Clone)]
pub struct Fuzzy {
    pub(crate) config: FuzzyConfig,
    pub(crate) cache: PatternCache,
}

impl Fuzzy {
    pub fn new(config: FuzzyConfig) -> Result<Self> {
        config.validate()?;
        let cache = PatternCache::new(&config)?;
        Ok(Self { config, cache })
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }
}
