// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: a total order over scored candidates.
//!
//! Precedence, best first:
//!
//! 1. **Contiguous chars** - more characters in exactly-matched terms
//! 2. **Intra-term fuzz** - fewer extra characters inside terms
//! 3. **Boundaries** - fully-bounded terms + strong left edges + ½ weak left edges
//! 4. **Inter-term fuzz** - less filler between terms
//! 5. **Start** - earlier match
//! 6. **Text** - fixed collation of the candidate strings
//!
//! The sort is stable, so candidates equal on all six keep haystack order and
//! identical inputs always rank identically.

use super::core::MatchInfo;
use crate::config::Collation;
use crate::engine::Fuzzy;
use std::cmp::Ordering;

/// Boundary score, doubled so weak edges stay integral.
fn bound_score(info: &MatchInfo) -> usize {
    2 * (info.terms + info.inter_lft2) + info.inter_lft1
}

/// Compare two scored candidates. `Less` means `a` ranks higher.
pub fn compare_info(
    a: &MatchInfo,
    b: &MatchInfo,
    a_text: &str,
    b_text: &str,
    collation: Collation,
) -> Ordering {
    b.chars
        .cmp(&a.chars)
        .then_with(|| a.intra_ins.cmp(&b.intra_ins))
        .then_with(|| bound_score(b).cmp(&bound_score(a)))
        .then_with(|| a.inter_ins.cmp(&b.inter_ins))
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| collation.compare(a_text, b_text))
}

impl Fuzzy {
    /// Positions into `info`, best first.
    pub fn rank<S: AsRef<str>>(&self, info: &[MatchInfo], haystack: &[S]) -> Vec<usize> {
        let text = |i: &MatchInfo| haystack.get(i.idx).map_or("", AsRef::as_ref);
        let collation = self.config.collation;

        let mut order: Vec<usize> = (0..info.len()).collect();
        order.sort_by(|&a, &b| {
            compare_info(&info[a], &info[b], text(&info[a]), text(&info[b]), collation)
        });
        order
    }
}
