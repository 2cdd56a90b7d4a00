//! Ranking precedence, end to end.

use super::common::{default_fuzzy, fuzzy_with, ranked_texts, search};
use fuzzmark::Collation;

#[test]
fn test_exact_whole_entry_is_fully_bounded() {
    let fuzzy = default_fuzzy();
    let haystack = ["manager"];
    let result = search(&fuzzy, &haystack, "manager");

    let (_, info) = result.ranked().next().expect("one match");
    assert_eq!(info.terms, 1);
    assert_eq!(info.intra_ins, 0);
    assert_eq!(info.inter_ins, 0);
    assert_eq!(info.chars, 7);
}

#[test]
fn test_exact_multi_term_entry_is_fully_bounded() {
    let fuzzy = default_fuzzy();
    let haystack = ["test manager"];
    let result = search(&fuzzy, &haystack, "test manager");

    let (_, info) = result.ranked().next().expect("one match");
    assert_eq!(info.terms, 2);
    assert_eq!(info.intra_ins, 0);
    // the separator between the terms is the only filler
    assert_eq!(info.inter_ins, 1);
}

#[test]
fn test_two_char_terms_match_exactly_only() {
    let fuzzy = default_fuzzy();
    let haystack = ["a-b-y", "xaby"];
    let result = search(&fuzzy, &haystack, "ab");
    assert_eq!(ranked_texts(&result, &haystack), vec!["xaby"]);
}

#[test]
fn test_exact_beats_fuzzy() {
    let fuzzy = default_fuzzy();
    let haystack = ["teXst", "the test"];
    let result = search(&fuzzy, &haystack, "test");
    assert_eq!(ranked_texts(&result, &haystack), vec!["the test", "teXst"]);
}

#[test]
fn test_substitution_ranks_below_exact() {
    let fuzzy = default_fuzzy();
    let haystack = ["hallo world", "hello world"];
    let result = search(&fuzzy, &haystack, "hello");
    assert_eq!(
        ranked_texts(&result, &haystack),
        vec!["hello world", "hallo world"]
    );
}

#[test]
fn test_bounded_beats_embedded() {
    let fuzzy = default_fuzzy();
    let haystack = ["contest", "test"];
    let result = search(&fuzzy, &haystack, "test");
    assert_eq!(ranked_texts(&result, &haystack), vec!["test", "contest"]);
}

#[test]
fn test_strong_boundary_beats_weak() {
    let fuzzy = default_fuzzy();
    let haystack = ["fooTest", "foo test"];
    let result = search(&fuzzy, &haystack, "test");
    assert_eq!(ranked_texts(&result, &haystack), vec!["foo test", "fooTest"]);
}

#[test]
fn test_less_filler_between_terms_wins() {
    let fuzzy = default_fuzzy();
    let haystack = ["foo xxxx bar", "foo x bar"];
    let result = search(&fuzzy, &haystack, "foo bar");
    assert_eq!(
        ranked_texts(&result, &haystack),
        vec!["foo x bar", "foo xxxx bar"]
    );
}

#[test]
fn test_earlier_start_wins() {
    let fuzzy = default_fuzzy();
    let haystack = ["xx test", "test"];
    let result = search(&fuzzy, &haystack, "test");
    assert_eq!(ranked_texts(&result, &haystack), vec!["test", "xx test"]);
}

#[test]
fn test_text_is_final_tie_break() {
    let fuzzy = default_fuzzy();
    let haystack = ["b test", "a test"];
    let result = search(&fuzzy, &haystack, "test");
    assert_eq!(ranked_texts(&result, &haystack), vec!["a test", "b test"]);
}

#[test]
fn test_collation_is_configurable() {
    let haystack = ["Apple", "apple"];

    let natural = default_fuzzy();
    let result = search(&natural, &haystack, "apple");
    assert_eq!(ranked_texts(&result, &haystack), vec!["apple", "Apple"]);

    let codepoint = fuzzy_with(|c| c.collation = Collation::Codepoint);
    let result = search(&codepoint, &haystack, "apple");
    assert_eq!(ranked_texts(&result, &haystack), vec!["Apple", "apple"]);
}

#[test]
fn test_rank_standalone() {
    let fuzzy = default_fuzzy();
    let haystack = ["contest", "test", "teXst"];
    let idxs = fuzzy.filter(&haystack, "test", None).unwrap().unwrap();
    let info = fuzzy.info(&idxs, &haystack, "test").unwrap();
    let order = fuzzy.rank(&info, &haystack);

    let ranked: Vec<&str> = order.iter().map(|&o| haystack[info[o].idx]).collect();
    assert_eq!(ranked, vec!["test", "contest", "teXst"]);
}
