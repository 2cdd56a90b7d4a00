// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: boolean filtering, term permutations, and the orchestrator that
//! ties them to scoring.
//!
//! `filter` answers "does it match at all", `strategy` decides which term
//! orderings to try and whether the result set is small enough to rank.

mod filter;
pub mod permute;
mod strategy;

pub use permute::{permute, permute_lexicographic};
pub use strategy::{SearchOptions, SearchResult};
