// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term permutations for out-of-order search.
//!
//! Growth is factorial, so callers bound the input length (5 terms is 120
//! orderings). Enumeration order matters: out-of-order search attributes each
//! candidate to the first ordering that matches it.

/// All orderings of `items`, in Heap's-algorithm order.
///
/// The first ordering is always `items` itself. An empty input yields one
/// empty ordering.
pub fn permute<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut arr = items.to_vec();
    let len = arr.len();
    let mut result = vec![arr.clone()];
    let mut c = vec![0usize; len];
    let mut i = 1;

    while i < len {
        if c[i] < i {
            let k = if i % 2 == 1 { c[i] } else { 0 };
            arr.swap(i, k);
            c[i] += 1;
            i = 1;
            result.push(arr.clone());
        } else {
            c[i] = 0;
            i += 1;
        }
    }

    result
}

/// All orderings of `items`, sorted lexicographically by original position.
pub fn permute_lexicographic<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let positions: Vec<usize> = (0..items.len()).collect();
    let mut orders = permute(&positions);
    orders.sort();
    orders
        .into_iter()
        .map(|order| order.into_iter().map(|i| items[i].clone()).collect())
        .collect()
}
