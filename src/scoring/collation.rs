// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed collation for the final ranking tie-break.
//!
//! Platform locales differ, and a tie-break that depends on them makes
//! rankings machine-dependent. `Natural` approximates a root-locale collator
//! with three levels, all computed from the strings alone:
//!
//! 1. primary: case- and accent-folded text ("resume" = "Résumé")
//! 2. secondary: accents, unaccented first ("resume" < "résumé")
//! 3. tertiary: case, lowercase first ("apple" < "Apple")
//!
//! and finally raw codepoints, so distinct strings never compare equal.

use crate::config::Collation;
use crate::util::normalize::fold_for_collation;
use std::cmp::Ordering;

impl Collation {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Codepoint => a.cmp(b),
            Collation::Natural => fold_for_collation(a)
                .cmp(&fold_for_collation(b))
                .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
                .then_with(|| {
                    a.chars()
                        .map(char::is_uppercase)
                        .cmp(b.chars().map(char::is_uppercase))
                })
                .then_with(|| a.cmp(b)),
        }
    }
}
