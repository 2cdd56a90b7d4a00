// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-term mutation variants.
//!
//! A fuzzy term compiles to an alternation of variants: the term itself, then
//! one variant per tolerated mutation at each position of the interior slice.
//! Each variant is a run of segments, and each segment is either characters
//! taken from the term or "fuzz" (a substituted or inserted character).
//! The split is kept so the character-level template can capture every
//! segment on its own and tell highlighted characters from filler.

use crate::config::{FuzzyConfig, IntraMode};

/// Which single mutations a term may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mutations {
    pub sub: bool,
    pub trn: bool,
    pub del: bool,
    pub ins: bool,
}

impl Mutations {
    pub fn any(&self) -> bool {
        self.sub || self.trn || self.del || self.ins
    }
}

/// Tier rules by stem length.
///
/// 1-2 chars are exact, 3-4 get a transposition (4 also an insertion),
/// 5+ get whatever the configuration enables.
pub fn mutations_for(config: &FuzzyConfig, len: usize) -> Mutations {
    match len {
        0..=2 => Mutations::default(),
        3 | 4 => Mutations {
            trn: config.intra_trn,
            ins: len == 4 && config.intra_ins > 0,
            ..Mutations::default()
        },
        _ => Mutations {
            sub: config.intra_sub,
            trn: config.intra_trn,
            del: config.intra_del,
            ins: config.intra_ins > 0,
        },
    }
}

/// A piece of a variant, already in regex syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub pattern: String,
    /// Filler that should not be highlighted.
    pub fuzz: bool,
}

impl Segment {
    fn literal(chars: &[char]) -> Self {
        Self {
            pattern: escape_chars(chars),
            fuzz: false,
        }
    }

    fn fuzz(pattern: String) -> Self {
        Self {
            pattern,
            fuzz: true,
        }
    }
}

pub type Variant = Vec<Segment>;

pub fn escape_chars(chars: &[char]) -> String {
    regex::escape(&chars.iter().collect::<String>())
}

/// `chars` repeated lazily up to `limit` times (`None` = unbounded).
pub fn lazy_repeat(chars: &str, limit: Option<usize>) -> String {
    match limit {
        Some(0) => String::new(),
        Some(1) => format!("(?:{})??", chars),
        None => format!("(?:{})*?", chars),
        Some(n) => format!("(?:{}){{0,{}}}?", chars, n),
    }
}

/// All variants for a fuzzable stem, first variant always the stem itself.
pub fn term_variants(config: &FuzzyConfig, stem: &[char]) -> Vec<Variant> {
    match config.intra_mode {
        IntraMode::SingleError => single_error_variants(config, stem),
        IntraMode::MultiInsert => vec![multi_insert_variant(config, stem)],
    }
}

fn single_error_variants(config: &FuzzyConfig, stem: &[char]) -> Vec<Variant> {
    let exact = vec![Segment::literal(stem)];
    let rules = mutations_for(config, stem.len());
    if !rules.any() {
        return vec![exact];
    }

    let (lo, hi) = config.intra_slice.bounds(stem.len());
    let (lft, chars, rgt) = (&stem[..lo], &stem[lo..hi], &stem[hi..]);
    let n = chars.len();
    let mut variants = vec![exact];

    let join = |parts: &[&[char]]| -> Vec<char> { parts.concat() };

    if rules.sub {
        let sub = format!("(?:{})", config.intra_chars);
        for i in 0..n {
            variants.push(vec![
                Segment::literal(&join(&[lft, &chars[..i]])),
                Segment::fuzz(sub.clone()),
                Segment::literal(&join(&[&chars[i + 1..], rgt])),
            ]);
        }
    }

    if rules.trn {
        for i in 0..n.saturating_sub(1) {
            if chars[i] != chars[i + 1] {
                let swapped = [chars[i + 1], chars[i]];
                variants.push(vec![Segment::literal(&join(&[
                    lft,
                    &chars[..i],
                    &swapped,
                    &chars[i + 2..],
                    rgt,
                ]))]);
            }
        }
    }

    if rules.del {
        for i in 0..n {
            let pattern = format!(
                "{}{}?{}",
                escape_chars(&join(&[lft, &chars[..i]])),
                escape_chars(&chars[i..=i]),
                escape_chars(&join(&[&chars[i + 1..], rgt])),
            );
            variants.push(vec![Segment {
                pattern,
                fuzz: false,
            }]);
        }
    }

    if rules.ins {
        let ins = lazy_repeat(&config.intra_chars, Some(1));
        for i in 0..n {
            variants.push(vec![
                Segment::literal(&join(&[lft, &chars[..i]])),
                Segment::fuzz(ins.clone()),
                Segment::literal(&join(&[&chars[i..], rgt])),
            ]);
        }
    }

    for variant in &mut variants {
        variant.retain(|seg| !seg.pattern.is_empty());
    }
    variants
}

fn multi_insert_variant(config: &FuzzyConfig, stem: &[char]) -> Variant {
    if config.intra_ins == 0 {
        return vec![Segment::literal(stem)];
    }
    let ins = lazy_repeat(&config.intra_chars, Some(config.intra_ins));
    let mut variant = Vec::with_capacity(stem.len() * 2);
    for (i, c) in stem.iter().enumerate() {
        if i > 0 {
            variant.push(Segment::fuzz(ins.clone()));
        }
        variant.push(Segment::literal(std::slice::from_ref(c)));
    }
    variant
}
