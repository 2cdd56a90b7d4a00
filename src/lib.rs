// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching over in-memory string lists, tuned for short needles.
//!
//! A needle is tokenized into terms, each term is compiled into a regex that
//! tolerates a small, length-dependent amount of typo, and the whole needle
//! becomes one template tested against every candidate. Survivors are scored
//! by how cleanly they matched and ranked by those scores.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   query     │────▶│   pattern    │────▶│   search    │
//! │ (tokenize,  │     │ (variants,   │     │  (filter,   │
//! │  negations) │     │  templates)  │     │  permute)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!                                                 ▼
//! ┌─────────────┐     ┌──────────────────────────────────┐
//! │  highlight  │◀────│             scoring              │
//! │  (render)   │     │ (MatchInfo, ranking, collation)  │
//! └─────────────┘     └──────────────────────────────────┘
//! ```
//!
//! All configuration-derived regexes live in one [`PatternCache`] owned by
//! the [`Fuzzy`] instance. Nothing is global.
//!
//! # Usage
//!
//! ```ignore
//! use fuzzmark::{Fuzzy, FuzzyConfig, highlight_html};
//!
//! let fuzzy = Fuzzy::new(FuzzyConfig::default())?;
//! let haystack = ["test manager", "manifest", "contest"];
//!
//! let result = fuzzy.search_with(&haystack, "man test", &fuzzy.options(true))?;
//! for (idx, info) in result.ranked() {
//!     println!("{}", highlight_html(haystack[idx], &info.ranges));
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod pattern;
pub mod query;
pub mod scoring;
pub mod search;
mod util;

#[doc(hidden)]
pub mod testing;

pub use config::{Collation, FuzzyConfig, InterBound, IntraMode, IntraSlice};
pub use engine::{Fuzzy, PatternCache};
pub use error::{FuzzyError, Result};
pub use highlight::{highlight, highlight_html};
pub use pattern::{CaptureMode, Template};
pub use query::{ParsedNeedle, Term};
pub use scoring::{compare_info, MatchInfo};
pub use search::{permute, permute_lexicographic, SearchOptions, SearchResult};
pub use util::normalize::fold_for_collation;
