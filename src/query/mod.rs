// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: from a raw needle to terms and negations.

mod split;
mod term;

pub use split::ParsedNeedle;
pub(crate) use term::split_contraction;
pub use term::Term;
