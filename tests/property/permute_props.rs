//! Permutation generator invariants.

use fuzzmark::{permute, permute_lexicographic};
use proptest::prelude::*;
use std::collections::HashSet;

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    /// n distinct items yield n! distinct orderings, the first being the input.
    #[test]
    fn prop_permute_complete(n in 0usize..6) {
        let items: Vec<usize> = (0..n).collect();
        let perms = permute(&items);

        prop_assert_eq!(perms.len(), factorial(n));
        prop_assert_eq!(&perms[0], &items);

        let unique: HashSet<&Vec<usize>> = perms.iter().collect();
        prop_assert_eq!(unique.len(), perms.len());
        for p in &perms {
            let mut sorted = p.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&sorted, &items);
        }
    }

    /// Lexicographic orderings are the same set, sorted.
    #[test]
    fn prop_lexicographic_sorted(n in 0usize..6) {
        let items: Vec<usize> = (0..n).collect();
        let lex = permute_lexicographic(&items);
        prop_assert!(lex.windows(2).all(|w| w[0] < w[1]));

        let heap: HashSet<Vec<usize>> = permute(&items).into_iter().collect();
        let lex_set: HashSet<Vec<usize>> = lex.into_iter().collect();
        prop_assert_eq!(heap, lex_set);
    }
}
