// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean filtering: the narrowing primitive.
//!
//! Compile once, test every candidate, keep the survivors in their original
//! order. No scoring, no ranking. Everything else in the search path is built
//! by calling this repeatedly on shrinking subsets.

use crate::engine::Fuzzy;
use crate::error::Result;
use crate::pattern::CaptureMode;
use crate::query::Term;

impl Fuzzy {
    /// Indices of haystack entries matching `needle`, in haystack order.
    ///
    /// With `idxs`, only those entries are tested (and their order kept).
    /// Returns `Ok(None)` when the needle has no terms at all.
    pub fn filter<S: AsRef<str>>(
        &self,
        haystack: &[S],
        needle: &str,
        idxs: Option<&[usize]>,
    ) -> Result<Option<Vec<usize>>> {
        let terms = self.tokenize(needle);
        self.filter_terms(haystack, &terms, idxs)
    }

    /// [`Fuzzy::filter`] over already-tokenized terms, in the order given.
    pub fn filter_terms<S: AsRef<str>>(
        &self,
        haystack: &[S],
        terms: &[Term],
        idxs: Option<&[usize]>,
    ) -> Result<Option<Vec<usize>>> {
        let Some(template) = self.compile(terms, CaptureMode::None)? else {
            return Ok(None);
        };

        let matches = |i: &usize| {
            haystack
                .get(*i)
                .is_some_and(|text| template.is_match(text.as_ref()))
        };

        let out = match idxs {
            Some(idxs) => idxs.iter().copied().filter(matches).collect(),
            None => (0..haystack.len()).filter(matches).collect(),
        };
        Ok(Some(out))
    }
}
