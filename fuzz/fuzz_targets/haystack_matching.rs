// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary haystacks.
//!
//! Search must agree with the boolean filter, and every highlight must
//! rebuild the candidate it came from.

#![no_main]

use arbitrary::Arbitrary;
use fuzzmark::testing::default_fuzzy;
use fuzzmark::{highlight, Fuzzy};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct Input {
    haystack: Vec<String>,
    needle: String,
}

fuzz_target!(|input: Input| {
    static FUZZY: std::sync::OnceLock<Fuzzy> = std::sync::OnceLock::new();
    let fuzzy = FUZZY.get_or_init(default_fuzzy);

    if input.haystack.len() > 64 || input.needle.chars().count() > 64 {
        return;
    }

    let Ok(result) = fuzzy.search(&input.haystack, &input.needle) else {
        return;
    };

    // INVARIANT 1: without negations, search returns exactly what filter does
    let parsed = fuzzy.parse(&input.needle);
    if parsed.negations.is_empty() {
        let filtered = fuzzy
            .filter_terms(&input.haystack, &parsed.terms, None)
            .ok()
            .flatten();
        assert_eq!(result.indices, filtered);
    }

    // INVARIANT 2: highlights rebuild the candidate
    let mut seen = HashSet::new();
    for (idx, info) in result.ranked() {
        assert!(seen.insert(idx));
        let text = &input.haystack[idx];
        let rebuilt = highlight(text, &info.ranges, |p, _| p.to_string(), String::new(), |mut a, p| {
            a.push_str(&p);
            a
        });
        assert_eq!(&rebuilt, text);
    }
});
