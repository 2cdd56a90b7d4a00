// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Render a candidate with its matched ranges marked.
//!
//! [`highlight`] walks the text once and hands each unmatched or matched
//! substring to a caller-supplied `mark`, folding the results with `append`.
//! That keeps it output-agnostic: the same walk builds HTML, ANSI-colored
//! terminal text, or a `Vec` of spans.
//!
//! ```ignore
//! let spans = highlight(
//!     "test manager",
//!     &[0..4],
//!     |part, matched| (part.to_string(), matched),
//!     Vec::new(),
//!     |mut acc, span| { acc.push(span); acc },
//! );
//! ```

use std::ops::Range;

/// Fold `text` split at `ranges` through `mark` and `append`.
///
/// Ranges must be sorted and non-overlapping byte ranges (as produced by the
/// scorer). Empty substrings are never passed to `mark`; a range that is out
/// of order or not on `char` boundaries is skipped. Concatenating every part
/// in order always reproduces `text`.
pub fn highlight<A, P>(
    text: &str,
    ranges: &[Range<usize>],
    mut mark: impl FnMut(&str, bool) -> P,
    init: A,
    mut append: impl FnMut(A, P) -> A,
) -> A {
    let mut acc = init;
    let mut pos = 0;

    for range in ranges {
        let start = range.start.min(text.len());
        let end = range.end.min(text.len());
        if start < pos || end < start {
            continue;
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }
        if start > pos {
            acc = append(acc, mark(&text[pos..start], false));
        }
        if end > start {
            acc = append(acc, mark(&text[start..end], true));
        }
        pos = end;
    }

    if pos < text.len() {
        acc = append(acc, mark(&text[pos..], false));
    }
    acc
}

/// Highlight with `<mark>` tags, HTML-escaping the text.
pub fn highlight_html(text: &str, ranges: &[Range<usize>]) -> String {
    highlight(
        text,
        ranges,
        |part, matched| {
            let escaped = escape_html(part);
            if matched {
                format!("<mark>{}</mark>", escaped)
            } else {
                escaped
            }
        },
        String::with_capacity(text.len()),
        |mut acc, part| {
            acc.push_str(&part);
            acc
        },
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
