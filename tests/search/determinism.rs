//! Identical inputs always produce identical output.

use super::common::{default_fuzzy, SAMPLE_HAYSTACK};

const NEEDLES: &[&str] = &[
    "test",
    "man test",
    "manager -json",
    "\"test man\"",
    "bob's",
    "cafe",
    "tst",
    "-unrelated",
];

#[test]
fn test_search_twice_is_identical() {
    let fuzzy = default_fuzzy();
    for needle in NEEDLES {
        for ooo in [false, true] {
            let opts = fuzzy.options(ooo);
            let first = fuzzy.search_with(SAMPLE_HAYSTACK, needle, &opts).unwrap();
            let second = fuzzy.search_with(SAMPLE_HAYSTACK, needle, &opts).unwrap();
            assert_eq!(first, second, "needle {:?} (ooo={})", needle, ooo);

            let a = serde_json::to_string(&first).unwrap();
            let b = serde_json::to_string(&second).unwrap();
            assert_eq!(a, b, "serialized output differs for {:?}", needle);
        }
    }
}

#[test]
fn test_fresh_engines_agree() {
    for needle in NEEDLES {
        let a = default_fuzzy().search(SAMPLE_HAYSTACK, needle).unwrap();
        let b = default_fuzzy().search(SAMPLE_HAYSTACK, needle).unwrap();
        assert_eq!(a, b, "needle {:?}", needle);
    }
}

#[test]
fn test_haystack_order_only_breaks_exact_ties() {
    let fuzzy = default_fuzzy();
    let forward = ["same", "same"];
    let result = fuzzy.search(&forward, "same").unwrap();
    let ranked: Vec<usize> = result.ranked().map(|(idx, _)| idx).collect();
    assert_eq!(ranked, vec![0, 1]);
}
