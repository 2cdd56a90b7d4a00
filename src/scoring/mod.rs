// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matched candidates get ordered.
//!
//! The scorer turns each match into counts (exact characters, fuzz, word
//! boundaries) and the ranker compares those counts lexicographically. There
//! is no blended numeric score: an extra exactly-matched character always
//! beats any amount of boundary alignment.

mod collation;
mod core;
pub mod ranking;

pub use self::core::MatchInfo;
pub use ranking::compare_info;
