// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match templates: one compiled regex per needle and capture mode.
//!
//! Layout of the captured forms, for terms `t0 .. tn`:
//!
//! ```text
//! (lead)(t0)(gap0)(t1)(gap1) ... (tn)(trail)
//! ```
//!
//! `lead` is a lazy `.??` and `trail` a greedy `.*`, so term and gap groups
//! always participate and tile the matched span exactly. In character mode
//! every variant segment inside a term group gets its own group too; only
//! the variant that actually matched participates.
//!
//! The role of each group is recorded at build time, so consumers never
//! compute group numbers by hand.

use super::variants::{escape_chars, lazy_repeat, term_variants, Segment};
use crate::engine::Fuzzy;
use crate::error::{FuzzyError, Result};
use crate::query::{split_contraction, Term};
use regex::{Captures, Regex, RegexBuilder};
use tracing::trace;

/// Terms longer than this compile as literals; their error variants grow
/// quadratically.
pub(crate) const MAX_FUZZY_TERM_CHARS: usize = 64;

/// Compiled size ceiling for one template.
const TEMPLATE_SIZE_LIMIT: usize = 64 * (1 << 20);

/// How much structure a template captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Boolean test only.
    None,
    /// One group per term and per inter-term gap.
    Word,
    /// Word groups plus one group per matched or fuzzed run inside each term.
    Char,
}

/// What a capture group holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    Lead,
    Term(usize),
    Gap(usize),
    Trail,
    /// Characters of term `n` taken from the needle.
    Matched(usize),
    /// Substituted or inserted characters inside term `n`.
    Fuzz(usize),
}

/// A term as the scorer needs to see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTerm {
    /// What an exact occurrence looks like: lowercased stem plus suffix.
    pub literal: String,
    /// Contraction matched literally after the fuzzable stem.
    pub suffix: String,
    pub exact: bool,
}

impl CompiledTerm {
    pub fn char_len(&self) -> usize {
        self.literal.chars().count()
    }
}

/// A compiled needle. Immutable; rebuilt per needle.
#[derive(Debug, Clone)]
pub struct Template {
    regex: Regex,
    mode: CaptureMode,
    terms: Vec<CompiledTerm>,
    roles: Vec<GroupRole>,
}

impl Template {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn terms(&self) -> &[CompiledTerm] {
        &self.terms
    }

    /// Role of every capture group, starting at group 1.
    pub fn roles(&self) -> &[GroupRole] {
        &self.roles
    }

    /// The contraction suffix of each term (empty when none).
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.suffix.as_str())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Accumulates pattern text and group roles in lockstep.
#[derive(Default)]
struct Builder {
    pattern: String,
    roles: Vec<GroupRole>,
}

impl Builder {
    fn group(&mut self, role: GroupRole, body: &str) {
        self.roles.push(role);
        self.pattern.push('(');
        self.pattern.push_str(body);
        self.pattern.push(')');
    }

    fn open(&mut self, role: GroupRole) {
        self.roles.push(role);
        self.pattern.push('(');
    }

    fn close(&mut self) {
        self.pattern.push(')');
    }

    fn push(&mut self, text: &str) {
        self.pattern.push_str(text);
    }
}

impl Fuzzy {
    /// Compile terms into a match template.
    ///
    /// Returns `Ok(None)` for an empty term list.
    pub fn compile(&self, terms: &[Term], mode: CaptureMode) -> Result<Option<Template>> {
        if terms.is_empty() {
            return Ok(None);
        }

        let config = &self.config;
        let gap = lazy_repeat(&config.inter_chars, config.inter_ins);
        let bound = config.inter_bound.pattern();
        let last = terms.len() - 1;

        let mut builder = Builder::default();
        let mut compiled = Vec::with_capacity(terms.len());

        builder.push("(?i)");
        if mode != CaptureMode::None {
            builder.group(GroupRole::Lead, ".??");
        }

        for (j, term) in terms.iter().enumerate() {
            let (stem, suffix, exact) = match term {
                Term::Exact(phrase) => (phrase.clone(), String::new(), true),
                Term::Word(word) => {
                    let (stem, suffix) = split_contraction(word, &self.cache.contraction);
                    (stem, suffix, false)
                }
            };
            let stem_chars: Vec<char> = stem.chars().collect();
            let variants = if exact || stem_chars.len() > MAX_FUZZY_TERM_CHARS {
                vec![vec![Segment {
                    pattern: escape_chars(&stem_chars),
                    fuzz: false,
                }]]
            } else {
                term_variants(config, &stem_chars)
            };

            if mode != CaptureMode::None {
                builder.open(GroupRole::Term(j));
            }
            push_term(&mut builder, j, &variants, &suffix, mode);
            if mode != CaptureMode::None {
                builder.close();
            }

            if j < last {
                builder.push(bound);
                if mode == CaptureMode::None {
                    builder.push(&gap);
                } else {
                    builder.group(GroupRole::Gap(j), &gap);
                }
            }

            compiled.push(CompiledTerm {
                literal: format!("{}{}", stem, suffix).to_lowercase(),
                suffix,
                exact,
            });
        }

        if mode != CaptureMode::None {
            builder.group(GroupRole::Trail, ".*");
        }

        trace!(pattern = %builder.pattern, ?mode, "compiled template");

        let regex = RegexBuilder::new(&builder.pattern)
            .size_limit(TEMPLATE_SIZE_LIMIT)
            .build()
            .map_err(|source| FuzzyError::Template { source })?;
        Ok(Some(Template {
            regex,
            mode,
            terms: compiled,
            roles: builder.roles,
        }))
    }
}

fn push_term(
    builder: &mut Builder,
    j: usize,
    variants: &[Vec<Segment>],
    suffix: &str,
    mode: CaptureMode,
) {
    let alternate = variants.len() > 1;
    if alternate {
        builder.push("(?:");
    }
    for (vi, variant) in variants.iter().enumerate() {
        if vi > 0 {
            builder.push("|");
        }
        for seg in variant {
            if mode == CaptureMode::Char {
                let role = if seg.fuzz {
                    GroupRole::Fuzz(j)
                } else {
                    GroupRole::Matched(j)
                };
                builder.group(role, &seg.pattern);
            } else {
                builder.push(&seg.pattern);
            }
        }
    }
    if alternate {
        builder.push(")");
    }

    if !suffix.is_empty() {
        let suffix = regex::escape(suffix);
        if mode == CaptureMode::Char {
            builder.group(GroupRole::Matched(j), &suffix);
        } else {
            builder.push(&suffix);
        }
    }
}
