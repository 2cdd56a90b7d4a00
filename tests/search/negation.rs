//! Negated terms (`-word`, `-"phrase"`).

use super::common::{default_fuzzy, search, search_ooo};

#[test]
fn test_negated_word_never_returned() {
    let fuzzy = default_fuzzy();
    let haystack = ["foo", "foo bar", "foobar", "foo baz", "FOO BAR"];
    let result = search(&fuzzy, &haystack, "foo -bar");

    assert_eq!(result.indices(), &[0, 3]);
    for &idx in result.indices() {
        let hit = fuzzy.filter(&[haystack[idx]], "bar", None).unwrap().unwrap();
        assert!(hit.is_empty(), "{:?} should not match bar", haystack[idx]);
    }
}

#[test]
fn test_negated_phrase() {
    let fuzzy = default_fuzzy();
    let haystack = ["foo bar baz", "foo bar", "foo baz bar"];
    let result = search(&fuzzy, &haystack, r#"foo -"bar baz""#);
    assert_eq!(result.indices(), &[1, 2]);
}

#[test]
fn test_negations_only_returns_everything_else_unranked() {
    let fuzzy = default_fuzzy();
    let haystack = ["apple pie", "banana split", "cherry tart", "Banana bread"];
    let result = search(&fuzzy, &haystack, "-banana");

    assert_eq!(result.indices(), &[0, 2]);
    assert!(result.info.is_none());
    assert!(result.order.is_none());
}

#[test]
fn test_hyphenated_word_is_not_a_negation() {
    let fuzzy = default_fuzzy();
    let haystack = ["x-ray machine", "ray"];
    let result = search(&fuzzy, &haystack, "x-ray");
    assert_eq!(result.indices(), &[0]);
}

#[test]
fn test_negation_applies_to_every_permutation() {
    let fuzzy = default_fuzzy();
    let haystack = ["foo baz", "foo bar baz", "baz foo"];
    let result = search_ooo(&fuzzy, &haystack, "baz foo -bar");

    // "baz foo" matches as typed, "foo baz" under the swapped order
    assert_eq!(result.indices(), &[2, 0]);
    assert_eq!(result.ranked().count(), 2);
}

#[test]
fn test_negation_applies_past_the_term_limit() {
    let fuzzy = default_fuzzy();
    let haystack = ["a1 b2 c3 d4 e5 f6 zz", "f6 e5 d4 c3 b2 a1"];
    let result = search_ooo(&fuzzy, &haystack, "a1 b2 c3 d4 e5 f6 -zz");

    assert_eq!(result.indices(), &[1]);
    assert!(result.info.is_none());
}

#[test]
fn test_negations_only_respect_prefiltered_subset() {
    let fuzzy = default_fuzzy();
    let haystack = ["apple pie", "banana split", "cherry tart"];
    let subset = [0, 1];
    let opts = fuzzy.options(false).prefiltered(&subset);
    let result = fuzzy.search_with(&haystack, "-banana", &opts).unwrap();

    assert_eq!(result.indices(), &[0]);
    assert!(result.order.is_none());
}
