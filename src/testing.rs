// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::config::FuzzyConfig;
use crate::engine::Fuzzy;
use crate::search::SearchResult;

/// A small haystack of mixed-case, punctuated candidates.
pub const SAMPLE_HAYSTACK: &[&str] = &[
    "test manager",
    "manifest.json",
    "TestManager",
    "the test of managers",
    "contest results",
    "manager_test_utils",
    "unrelated entry",
    "Café olé",
    "it's bob's turn",
    "latest-test-run",
];

/// Engine with the default configuration.
pub fn default_fuzzy() -> Fuzzy {
    match Fuzzy::new(FuzzyConfig::default()) {
        Ok(fuzzy) => fuzzy,
        Err(e) => panic!("default configuration must compile: {}", e),
    }
}

/// Ranked candidate strings, best first.
pub fn ranked_texts<'a>(result: &SearchResult, haystack: &[&'a str]) -> Vec<&'a str> {
    result
        .ranked()
        .filter_map(|(idx, _)| haystack.get(idx).copied())
        .collect()
}
