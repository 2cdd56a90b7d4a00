// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for needle handling.
//!
//! Throws arbitrary byte sequences at the search API as needles against a
//! fixed haystack. Unbalanced quotes, stray hyphens, regex metacharacters,
//! emoji: none of it may panic or produce out-of-range results.

#![no_main]

use fuzzmark::testing::{default_fuzzy, SAMPLE_HAYSTACK};
use fuzzmark::Fuzzy;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|needle: &[u8]| {
    static FUZZY: std::sync::OnceLock<Fuzzy> = std::sync::OnceLock::new();
    let fuzzy = FUZZY.get_or_init(default_fuzzy);

    let needle = String::from_utf8_lossy(needle);

    // Cap needle length (on a char boundary) to avoid timeouts
    let end = needle
        .char_indices()
        .nth(200)
        .map_or(needle.len(), |(i, _)| i);
    let needle = &needle[..end];

    for ooo in [false, true] {
        // INVARIANT 1: search never panics; errors only for oversized templates
        let Ok(result) = fuzzy.search_with(SAMPLE_HAYSTACK, needle, &fuzzy.options(ooo)) else {
            continue;
        };

        // INVARIANT 2: indices are in range and unique
        let mut seen = HashSet::new();
        for &idx in result.indices() {
            assert!(idx < SAMPLE_HAYSTACK.len(), "index {} out of range", idx);
            assert!(seen.insert(idx), "duplicate index {}", idx);
        }

        // INVARIANT 3: ranges are sorted, disjoint, and on char boundaries
        for (idx, info) in result.ranked() {
            let text = SAMPLE_HAYSTACK[idx];
            for r in &info.ranges {
                assert!(r.start < r.end && r.end <= text.len());
                assert!(text.is_char_boundary(r.start) && text.is_char_boundary(r.end));
            }
            for pair in info.ranges.windows(2) {
                assert!(pair[0].end < pair[1].start, "overlapping ranges {:?}", info.ranges);
            }
        }

        // INVARIANT 4: a ranked result orders every match
        if let Some(order) = &result.order {
            assert_eq!(order.len(), result.indices().len());
        }
    }
});
