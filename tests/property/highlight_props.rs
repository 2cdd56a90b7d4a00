//! Highlighter invariants.

use super::common::{default_fuzzy, parts};
use fuzzmark::highlight;
use proptest::prelude::*;
use std::ops::Range;

/// Arbitrary text with multi-byte characters mixed in.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zé日 _-]{0,24}").unwrap()
}

/// Sorted, disjoint byte ranges on char boundaries of `text`.
fn ranges_for(text: &str, cuts: &[usize]) -> Vec<Range<usize>> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let mut picked: Vec<usize> = cuts.iter().map(|c| bounds[c % bounds.len()]).collect();
    picked.sort_unstable();
    picked.dedup();
    picked
        .chunks_exact(2)
        .map(|pair| pair[0]..pair[1])
        .collect()
}

proptest! {
    /// Concatenating all parts reproduces the input.
    #[test]
    fn prop_parts_rebuild_text(
        text in text_strategy(),
        cuts in prop::collection::vec(0usize..64, 0..8),
    ) {
        let ranges = ranges_for(&text, &cuts);
        let rebuilt = highlight(&text, &ranges, |p, _| p.to_string(), String::new(), |mut a, p| {
            a.push_str(&p);
            a
        });
        prop_assert_eq!(rebuilt, text);
    }

    /// Matched and unmatched parts alternate and are never empty.
    #[test]
    fn prop_parts_nonempty(
        text in text_strategy(),
        cuts in prop::collection::vec(0usize..64, 0..8),
    ) {
        let ranges = ranges_for(&text, &cuts);
        let parts: Vec<(String, bool)> = highlight(
            &text,
            &ranges,
            |p, m| (p.to_string(), m),
            Vec::new(),
            |mut a, p| {
                a.push(p);
                a
            },
        );
        prop_assert!(parts.iter().all(|(p, _)| !p.is_empty()));
        let matched: usize = parts.iter().filter(|(_, m)| *m).count();
        prop_assert_eq!(matched, ranges.iter().filter(|r| !r.is_empty()).count());
    }

    /// Scorer ranges rebuild the candidate they came from.
    #[test]
    fn prop_search_highlights_rebuild(
        hay in prop::collection::vec(text_strategy(), 1..10),
        needle in prop::string::string_regex("[a-z]{2,5}( [a-z]{2,5})?").unwrap(),
    ) {
        let fuzzy = default_fuzzy();
        let result = fuzzy.search_with(&hay, &needle, &fuzzy.options(true)).unwrap();
        for (idx, info) in result.ranked() {
            let rebuilt: String = parts(&hay[idx], info).into_iter().map(|(s, _)| s).collect();
            prop_assert_eq!(&rebuilt, &hay[idx]);
        }
    }
}
