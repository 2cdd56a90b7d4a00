//! Highlight ranges from real searches.

use super::common::{default_fuzzy, parts, search, SAMPLE_HAYSTACK};
use fuzzmark::highlight_html;

#[test]
fn test_parts_rebuild_every_candidate() {
    let fuzzy = default_fuzzy();
    for needle in ["test", "man test", "bob's", "ole", "manager"] {
        let result = fuzzy
            .search_with(SAMPLE_HAYSTACK, needle, &fuzzy.options(true))
            .unwrap();
        for (idx, info) in result.ranked() {
            let text = SAMPLE_HAYSTACK[idx];
            let rebuilt: String = parts(text, info).into_iter().map(|(s, _)| s).collect();
            assert_eq!(rebuilt, text, "needle {:?}", needle);
        }
    }
}

#[test]
fn test_ranges_are_sorted_and_disjoint() {
    let fuzzy = default_fuzzy();
    let result = fuzzy
        .search_with(SAMPLE_HAYSTACK, "test man", &fuzzy.options(true))
        .unwrap();
    assert!(result.ranked().count() > 0);
    for (idx, info) in result.ranked() {
        let text = SAMPLE_HAYSTACK[idx];
        for pair in info.ranges.windows(2) {
            assert!(pair[0].end < pair[1].start, "{:?} in {:?}", info.ranges, text);
        }
        for r in &info.ranges {
            assert!(r.start < r.end);
            assert!(text.is_char_boundary(r.start) && text.is_char_boundary(r.end));
        }
    }
}

#[test]
fn test_matched_parts_spell_the_terms() {
    let fuzzy = default_fuzzy();
    let haystack = ["the test of managers"];
    let result = search(&fuzzy, &haystack, "test manager");
    let (_, info) = result.ranked().next().expect("one match");

    let matched: Vec<String> = parts(haystack[0], info)
        .into_iter()
        .filter(|(_, m)| *m)
        .map(|(s, _)| s)
        .collect();
    assert_eq!(matched, vec!["test", "manager"]);
}

#[test]
fn test_html_rendering() {
    let fuzzy = default_fuzzy();
    let haystack = ["test <manager>"];
    let result = search(&fuzzy, &haystack, "manager");
    let (_, info) = result.ranked().next().expect("one match");
    assert_eq!(
        highlight_html(haystack[0], &info.ranges),
        "test &lt;<mark>manager</mark>&gt;"
    );
}
