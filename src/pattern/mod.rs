// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pattern compilation: terms in, fuzzy match template out.
//!
//! Each term becomes an alternation of its tolerated mutations, terms are
//! joined by lazy gaps, and the capture mode decides how much of that
//! structure is visible to the scorer afterwards.

mod template;
pub mod variants;

pub use template::{CaptureMode, CompiledTerm, GroupRole, Template};
pub use variants::{mutations_for, Mutations};
