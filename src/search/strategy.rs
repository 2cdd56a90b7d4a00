// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search orchestration: filter, then (maybe) permute, then (maybe) rank.
//!
//! ```text
//! needle ──parse──► terms + negations
//!                      │
//!        ┌─────────────┴──────────────┐
//!   in order / 1 term           out of order, N terms
//!        │                            │
//!     filter                narrow: filter each term alone,
//!        │                  longest first, intersecting
//!        │                            │
//!        │                   N > limit? ──► narrowed, unranked
//!        │                            │
//!        │                  for each permutation:
//!        │                  filter the unclaimed remainder
//!        └─────────────┬──────────────┘
//!                      ▼
//!              drop negated entries
//!                      │
//!       count ≤ info_thresh? ──no──► indices only
//!                      │
//!        score + rank each group, concatenate
//! ```
//!
//! Every candidate is attributed to exactly one term ordering: the first
//! permutation (in enumeration order) under which it matched. Groups are
//! ranked separately and concatenated in permutation order, so in-order
//! matches always come first.

use super::permute::permute;
use crate::config::FuzzyConfig;
use crate::engine::Fuzzy;
use crate::error::Result;
use crate::query::Term;
use crate::scoring::MatchInfo;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Per-call search knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions<'a> {
    /// Largest term count that gets permuted; 0 disables out-of-order search.
    pub out_of_order: usize,
    /// Above this many matches, skip scoring and ranking.
    pub info_thresh: usize,
    /// Restrict the search to these haystack indices.
    pub prefiltered: Option<&'a [usize]>,
}

impl<'a> SearchOptions<'a> {
    /// In-order search with the configured threshold.
    pub fn new(config: &FuzzyConfig) -> Self {
        Self {
            out_of_order: 0,
            info_thresh: config.info_thresh,
            prefiltered: None,
        }
    }

    pub fn out_of_order(mut self, limit: usize) -> Self {
        self.out_of_order = limit;
        self
    }

    pub fn info_thresh(mut self, thresh: usize) -> Self {
        self.info_thresh = thresh;
        self
    }

    pub fn prefiltered(mut self, idxs: &'a [usize]) -> Self {
        self.prefiltered = Some(idxs);
        self
    }
}

/// What a search found.
///
/// | `indices` | `info`/`order` | meaning                                   |
/// |-----------|----------------|-------------------------------------------|
/// | `None`    | `None`         | nothing to search for (no-op)             |
/// | `Some`    | `None`         | matches, unranked (threshold, term limit, negations only) |
/// | `Some`    | `Some`         | matches, scored and ranked                |
///
/// `order` holds positions into `info`, best first; each info record names
/// its own haystack index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub indices: Option<Vec<usize>>,
    pub info: Option<Vec<MatchInfo>>,
    pub order: Option<Vec<usize>>,
}

impl SearchResult {
    pub fn noop() -> Self {
        Self::default()
    }

    pub fn unranked(indices: Vec<usize>) -> Self {
        Self {
            indices: Some(indices),
            ..Self::default()
        }
    }

    pub fn is_noop(&self) -> bool {
        self.indices.is_none()
    }

    /// Matched haystack indices, empty for a no-op.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_deref().unwrap_or(&[])
    }

    /// `(haystack index, info)` pairs, best first. Empty when unranked.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &MatchInfo)> + '_ {
        let info = self.info.as_deref().unwrap_or(&[]);
        self.order
            .iter()
            .flatten()
            .filter_map(move |&pos| info.get(pos))
            .map(|m| (m.idx, m))
    }
}

impl Fuzzy {
    /// Options for this engine, with out-of-order search up to the
    /// configured term limit when `out_of_order` is set.
    pub fn options(&self, out_of_order: bool) -> SearchOptions<'static> {
        let opts = SearchOptions::new(&self.config);
        if out_of_order {
            opts.out_of_order(self.config.out_of_order_limit)
        } else {
            opts
        }
    }

    /// In-order search with default options.
    pub fn search<S: AsRef<str>>(&self, haystack: &[S], needle: &str) -> Result<SearchResult> {
        self.search_with(haystack, needle, &self.options(false))
    }

    pub fn search_with<S: AsRef<str>>(
        &self,
        haystack: &[S],
        needle: &str,
        opts: &SearchOptions<'_>,
    ) -> Result<SearchResult> {
        let parsed = self.parse(needle);
        let negs = parsed.negation_regex()?;
        let terms = parsed.terms;
        debug!(?terms, negations = ?parsed.negations, "parsed needle");

        let not_negated = |idx: &usize| match (&negs, haystack.get(*idx)) {
            (Some(re), Some(text)) => !re.is_match(text.as_ref()),
            (None, Some(_)) => true,
            (_, None) => false,
        };

        if terms.is_empty() {
            if negs.is_none() {
                return Ok(SearchResult::noop());
            }
            let idxs = match opts.prefiltered {
                Some(idxs) => idxs.iter().copied().filter(not_negated).collect(),
                None => (0..haystack.len()).filter(not_negated).collect(),
            };
            return Ok(SearchResult::unranked(idxs));
        }

        let mut groups: Vec<(Vec<Term>, Vec<usize>)> =
            if opts.out_of_order > 0 && terms.len() > 1 {
                let Some(narrowed) = self.narrow(haystack, &terms, opts.prefiltered)? else {
                    return Ok(SearchResult::unranked(Vec::new()));
                };
                if terms.len() > opts.out_of_order {
                    debug!(
                        terms = terms.len(),
                        limit = opts.out_of_order,
                        "too many terms to permute; returning narrowed set"
                    );
                    let idxs = narrowed.into_iter().filter(not_negated).collect();
                    return Ok(SearchResult::unranked(idxs));
                }
                self.permuted_groups(haystack, &terms, &narrowed)?
            } else {
                let idxs = self
                    .filter_terms(haystack, &terms, opts.prefiltered)?
                    .unwrap_or_default();
                vec![(terms, idxs)]
            };

        if negs.is_some() {
            for (_, idxs) in &mut groups {
                idxs.retain(not_negated);
            }
        }

        let count: usize = groups.iter().map(|(_, idxs)| idxs.len()).sum();
        if count > opts.info_thresh {
            debug!(count, thresh = opts.info_thresh, "over info threshold; skipping ranking");
            return Ok(SearchResult::unranked(flatten(groups)));
        }

        let mut info = Vec::with_capacity(count);
        let mut order = Vec::with_capacity(count);
        for (terms, idxs) in &groups {
            if idxs.is_empty() {
                continue;
            }
            let scored = self.info_terms(idxs, haystack, terms)?;
            let offset = info.len();
            order.extend(self.rank(&scored, haystack).into_iter().map(|o| o + offset));
            info.extend(scored);
        }

        Ok(SearchResult {
            indices: Some(flatten(groups)),
            info: Some(info),
            order: Some(order),
        })
    }

    /// Candidates containing every term somewhere, in any order.
    ///
    /// Returns `None` as soon as a step leaves nothing.
    fn narrow<S: AsRef<str>>(
        &self,
        haystack: &[S],
        terms: &[Term],
        prefiltered: Option<&[usize]>,
    ) -> Result<Option<Vec<usize>>> {
        let mut by_len: Vec<&Term> = terms.iter().collect();
        by_len.sort_by(|a, b| b.char_len().cmp(&a.char_len()));

        let mut subset: Option<Vec<usize>> = prefiltered.map(<[usize]>::to_vec);
        for term in by_len {
            if subset.as_ref().is_some_and(Vec::is_empty) {
                return Ok(None);
            }
            let next = self
                .filter_terms(haystack, std::slice::from_ref(term), subset.as_deref())?
                .unwrap_or_default();
            debug!(term = term.text(), remaining = next.len(), "narrowed");
            subset = Some(next);
        }
        Ok(subset.filter(|s| !s.is_empty()))
    }

    /// Filter `narrowed` under each term ordering, each candidate claimed by
    /// the first ordering that matches it.
    fn permuted_groups<S: AsRef<str>>(
        &self,
        haystack: &[S],
        terms: &[Term],
        narrowed: &[usize],
    ) -> Result<Vec<(Vec<Term>, Vec<usize>)>> {
        let perms = permute(terms);
        debug!(permutations = perms.len(), candidates = narrowed.len(), "permuting");

        let mut claimed: HashSet<usize> = HashSet::with_capacity(narrowed.len());
        let mut groups = Vec::with_capacity(perms.len());
        for perm in perms {
            if claimed.len() >= narrowed.len() {
                groups.push((perm, Vec::new()));
                continue;
            }
            let remaining: Vec<usize> = narrowed
                .iter()
                .copied()
                .filter(|i| !claimed.contains(i))
                .collect();
            let matched = self
                .filter_terms(haystack, &perm, Some(&remaining))?
                .unwrap_or_default();
            claimed.extend(matched.iter().copied());
            groups.push((perm, matched));
        }
        Ok(groups)
    }
}

fn flatten(groups: Vec<(Vec<Term>, Vec<usize>)>) -> Vec<usize> {
    groups.into_iter().flat_map(|(_, idxs)| idxs).collect()
}
