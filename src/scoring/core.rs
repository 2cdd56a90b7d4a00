// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-candidate match statistics.
//!
//! Every candidate that survived filtering is matched again, this time with
//! capture groups, to find out *how* it matched: where each term landed,
//! whether it landed exactly, whether its edges sit on word boundaries, and
//! how much filler sits inside and between terms. Those numbers are what the
//! ranker compares.
//!
//! # Refinement
//!
//! Leftmost-first matching commits to the first place a term fits, even a
//! fuzzy one. Searching "test" in "fittest" lands on "ttest" (one insertion)
//! even though an exact "test" starts one character later, and in
//! "teXst-test" the exact occurrence sits in the trailing gap. When a term
//! didn't match exactly, the text from its fuzzy occurrence through the end
//! of its gap is probed for a literal occurrence; if there is one, the term
//! is moved there and everything it skipped over is reattributed to the
//! preceding gap.
//! The same relocation is replayed on the character-level pass so highlights
//! agree with the statistics.
//!
//! # Boundaries
//!
//! | Kind   | Left edge                    | Right edge                   |
//! |--------|------------------------------|------------------------------|
//! | strong | string start or separator    | string end or separator      |
//! | weak   | letter/digit or case change  | letter/digit or case change  |
//!
//! Only exact terms count boundaries. A term bounded on both sides (either
//! kind) counts as a fully-bounded term.

use crate::engine::Fuzzy;
use crate::error::Result;
use crate::pattern::{CaptureMode, CompiledTerm, GroupRole, Template};
use crate::query::Term;
use serde::Serialize;
use std::ops::Range;
use tracing::warn;

/// How one candidate matched. Offsets are byte offsets into the candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Haystack index of the candidate.
    pub idx: usize,
    /// Where the first term starts.
    pub start: usize,
    /// Characters covered by exactly-matched terms.
    pub chars: usize,
    /// Exact terms bounded on both sides.
    pub terms: usize,
    /// Characters between terms.
    pub inter_ins: usize,
    /// Extra characters inside terms.
    pub intra_ins: usize,
    pub inter_lft2: usize,
    pub inter_rgt2: usize,
    pub inter_lft1: usize,
    pub inter_rgt1: usize,
    /// Highlight ranges: sorted, non-overlapping, adjacent runs merged.
    pub ranges: Vec<Range<usize>>,
}

/// A term moved onto a later exact occurrence.
#[derive(Debug, Clone)]
struct Refinement {
    term: usize,
    span: Range<usize>,
}

impl Fuzzy {
    /// Score candidates `idxs` against `needle`, terms in the order typed.
    pub fn info<S: AsRef<str>>(
        &self,
        idxs: &[usize],
        haystack: &[S],
        needle: &str,
    ) -> Result<Vec<MatchInfo>> {
        let terms = self.tokenize(needle);
        self.info_terms(idxs, haystack, &terms)
    }

    /// Score candidates against already-tokenized terms.
    ///
    /// Candidates that no longer match (or are out of range) are skipped, so
    /// every returned record carries its own `idx`.
    pub fn info_terms<S: AsRef<str>>(
        &self,
        idxs: &[usize],
        haystack: &[S],
        terms: &[Term],
    ) -> Result<Vec<MatchInfo>> {
        let (Some(word), Some(chars)) = (
            self.compile(terms, CaptureMode::Word)?,
            self.compile(terms, CaptureMode::Char)?,
        ) else {
            return Ok(Vec::new());
        };

        let mut out = Vec::with_capacity(idxs.len());
        for &idx in idxs {
            let Some(text) = haystack.get(idx) else {
                continue;
            };
            match self.score_one(idx, text.as_ref(), &word, &chars) {
                Some(info) => out.push(info),
                None => warn!(idx, "candidate did not re-match its scoring template"),
            }
        }
        Ok(out)
    }

    fn score_one(&self, idx: usize, text: &str, word: &Template, chars: &Template) -> Option<MatchInfo> {
        let caps = word.captures(text)?;

        // Lead, then (term, gap) pairs; the final "gap" is the trail.
        let mut spans: Vec<Range<usize>> = (1..caps.len())
            .map(|g| caps.get(g).map_or(0..0, |m| m.range()))
            .collect();

        let terms = word.terms();
        let mut info = MatchInfo {
            idx,
            start: spans[1].start,
            ..MatchInfo::default()
        };
        let mut refinements = Vec::new();

        for (j, term) in terms.iter().enumerate() {
            let k = 1 + 2 * j;
            let term_len = term.char_len();
            let mut exact = text[spans[k].clone()].to_lowercase() == term.literal;

            // Probe from the fuzzy occurrence through the end of its gap.
            let region = spans[k].start..spans[k + 1].end;
            if !exact {
                if let Some(found) = find_folded(&text[region.clone()], &term.literal) {
                    let base = region.start;
                    let span = base + found.start..base + found.end;
                    spans[k - 1].end = span.start;
                    spans[k + 1].start = span.end;
                    spans[k] = span.clone();
                    if j == 0 {
                        info.start = span.start;
                    }
                    refinements.push(Refinement { term: j, span });
                    exact = true;
                }
            }

            let span = spans[k].clone();
            if exact {
                self.count_bounds(text, span.clone(), term, &mut info);
            }

            let group_len = char_count(&text[span]);
            if group_len > term_len {
                info.intra_ins += group_len - term_len;
            }
            if j > 0 {
                info.inter_ins += char_count(&text[spans[k - 1].clone()]);
            }
        }

        info.ranges = match chars.captures(text) {
            Some(caps) => {
                let mut runs = Vec::new();
                for j in 0..terms.len() {
                    if let Some(r) = refinements.iter().find(|r| r.term == j) {
                        runs.push(r.span.clone());
                        continue;
                    }
                    // Group order is left to right, so runs come out sorted.
                    for (g, role) in chars.roles().iter().enumerate() {
                        if *role == GroupRole::Matched(j) {
                            if let Some(m) = caps.get(g + 1) {
                                runs.push(m.range());
                            }
                        }
                    }
                }
                merge_runs(runs)
            }
            None => {
                warn!(idx, "character template did not re-match; highlighting whole terms");
                merge_runs((0..terms.len()).map(|j| spans[1 + 2 * j].clone()).collect())
            }
        };

        Some(info)
    }

    /// Tally boundary counters for one exactly-matched term.
    fn count_bounds(&self, text: &str, span: Range<usize>, term: &CompiledTerm, info: &mut MatchInfo) {
        let before = text[..span.start].chars().next_back();
        let first = text[span.start..].chars().next();
        let last = text[..span.end].chars().next_back();
        let after = text[span.end..].chars().next();

        let pre = match before {
            None => {
                info.inter_lft2 += 1;
                true
            }
            Some(b) if self.is_strong_bound(b) => {
                info.inter_lft2 += 1;
                true
            }
            Some(b) if first.is_some_and(|f| self.is_weak_bound(b, f)) => {
                info.inter_lft1 += 1;
                true
            }
            Some(_) => false,
        };

        let suf = match after {
            None => {
                info.inter_rgt2 += 1;
                true
            }
            Some(a) if self.is_strong_bound(a) => {
                info.inter_rgt2 += 1;
                true
            }
            Some(a) if last.is_some_and(|l| self.is_weak_bound(l, a)) => {
                info.inter_rgt1 += 1;
                true
            }
            Some(_) => false,
        };

        info.chars += term.char_len();
        if pre && suf {
            info.terms += 1;
        }
    }

    fn is_strong_bound(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.cache.inter_bound.is_match(c.encode_utf8(&mut buf))
    }

    fn is_weak_bound(&self, a: char, b: char) -> bool {
        let pair: String = [a, b].iter().collect();
        self.cache.intra_bound.is_match(&pair)
    }
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Byte range of the first case-insensitive occurrence of `needle` in `hay`.
fn find_folded(hay: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    'outer: for (i, _) in hay.char_indices() {
        let mut end = i;
        let mut rest = hay[i..].chars();
        for nc in needle.chars() {
            match rest.next() {
                Some(hc) if hc == nc || hc.to_lowercase().eq(nc.to_lowercase()) => {
                    end += hc.len_utf8();
                }
                _ => continue 'outer,
            }
        }
        return Some(i..end);
    }
    None
}

/// Drop empty runs and merge runs that touch.
fn merge_runs(runs: Vec<Range<usize>>) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(runs.len());
    for run in runs.into_iter().filter(|r| !r.is_empty()) {
        match merged.last_mut() {
            Some(last) if last.end == run.start => last.end = run.end,
            _ => merged.push(run),
        }
    }
    merged
}
