//! Configuration knobs that change what matches.

use super::common::{fuzzy_with, search};
use fuzzmark::{FuzzyConfig, FuzzyError, InterBound, IntraMode};

#[test]
fn test_inter_ins_zero_forces_adjacency() {
    let fuzzy = fuzzy_with(|c| c.inter_ins = Some(0));
    let haystack = ["foo bar", "foobar"];
    assert_eq!(search(&fuzzy, &haystack, "foo bar").indices(), &[1]);
}

#[test]
fn test_inter_ins_bounds_the_gap() {
    let fuzzy = fuzzy_with(|c| c.inter_ins = Some(2));
    let haystack = ["foo bar", "foo   bar"];
    assert_eq!(search(&fuzzy, &haystack, "foo bar").indices(), &[0]);
}

#[test]
fn test_strict_inter_bound() {
    let fuzzy = fuzzy_with(|c| c.inter_bound = InterBound::Strict);
    let haystack = ["foobar", "foo bar"];
    assert_eq!(search(&fuzzy, &haystack, "foo bar").indices(), &[1]);
}

#[test]
fn test_multi_insert_mode_tolerates_gaps_inside_terms() {
    let haystack = ["hello"];

    let single = fuzzy_with(|_| {});
    assert!(search(&single, &haystack, "hlo").indices().is_empty());

    let multi = fuzzy_with(|c| c.intra_mode = IntraMode::MultiInsert);
    let result = search(&multi, &haystack, "hlo");
    assert_eq!(result.indices(), &[0]);
    let (_, info) = result.ranked().next().expect("one match");
    assert_eq!(info.intra_ins, 2);
}

#[test]
fn test_disabling_mutations() {
    let fuzzy = fuzzy_with(|c| {
        c.intra_sub = false;
        c.intra_trn = false;
        c.intra_del = false;
        c.intra_ins = 0;
    });
    let haystack = ["hallo", "hello", "hlelo"];
    assert_eq!(search(&fuzzy, &haystack, "hello").indices(), &[1]);
}

#[test]
fn test_config_from_json() {
    let config = FuzzyConfig::from_json(r#"{"outOfOrderLimit": 2, "interIns": 0}"#).unwrap();
    assert_eq!(config.out_of_order_limit, 2);
    assert_eq!(config.inter_ins, Some(0));
    assert_eq!(config.info_thresh, 1000);
}

#[test]
fn test_bad_json_is_config_error() {
    match FuzzyConfig::from_json("{ not json") {
        Err(FuzzyError::Config { .. }) => {}
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn test_long_single_term_searches_cleanly() {
    let fuzzy = fuzzy_with(|_| {});
    let word = "abcdefghij".repeat(20);
    let haystack = [word.as_str(), "x"];

    let result = fuzzy.search(&haystack, &word).unwrap();
    assert_eq!(result.indices(), &[0]);

    let spaced = format!("{} {}", word, word);
    assert!(fuzzy.search(&haystack, &spaced).is_ok());
}
