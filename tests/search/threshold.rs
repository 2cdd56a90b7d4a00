//! The info threshold: large result sets come back unranked.

use super::common::default_fuzzy;

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item {}", i)).collect()
}

#[test]
fn test_default_threshold_boundary() {
    let fuzzy = default_fuzzy();

    let at_limit = numbered(1000);
    let result = fuzzy.search(&at_limit, "item").unwrap();
    assert_eq!(result.indices().len(), 1000);
    assert!(result.info.is_some());
    assert_eq!(result.order.as_ref().map(Vec::len), Some(1000));

    let over = numbered(1001);
    let result = fuzzy.search(&over, "item").unwrap();
    assert_eq!(result.indices().len(), 1001);
    assert!(result.info.is_none());
    assert!(result.order.is_none());
}

#[test]
fn test_unranked_indices_keep_haystack_order() {
    let fuzzy = default_fuzzy();
    let haystack = numbered(50);
    let opts = fuzzy.options(false).info_thresh(10);
    let result = fuzzy.search_with(&haystack, "item", &opts).unwrap();

    let expected: Vec<usize> = (0..50).collect();
    assert_eq!(result.indices(), expected.as_slice());
    assert_eq!(result.ranked().count(), 0);
}

#[test]
fn test_zero_threshold_still_ranks_empty_results() {
    let fuzzy = default_fuzzy();
    let haystack = ["nothing here"];
    let opts = fuzzy.options(false).info_thresh(0);
    let result = fuzzy.search_with(&haystack, "zebra", &opts).unwrap();

    assert!(result.indices().is_empty());
    assert_eq!(result.info, Some(Vec::new()));
    assert_eq!(result.order, Some(Vec::new()));
}
