//! Heuristic fallback properties.

use proptest::prelude::*;

use packcalc::core::{Method, SolveOptions, calculate_packs_with, heuristic};

fn arb_desc_sizes() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::btree_set(1u64..=10_000, 1..=6)
        .prop_map(|set| set.into_iter().rev().collect())
}

proptest! {
    #[test]
    fn always_covers_the_order(sizes in arb_desc_sizes(), order in 1u64..=10_000_000) {
        let solution = heuristic::solve(&sizes, order);
        prop_assert!(solution.total_items >= order);
        for (size, count) in &solution.packs {
            prop_assert!(sizes.contains(size));
            prop_assert!(*count > 0);
        }
    }

    #[test]
    fn never_beats_exact(sizes in arb_desc_sizes(), order in 1u64..=20_000) {
        let signed: Vec<i64> = sizes.iter().map(|&size| size as i64).collect();
        let order = order as i64;
        let exact = calculate_packs_with(&signed, order, &SolveOptions::default()).unwrap();
        let bounded = calculate_packs_with(&signed, order, &SolveOptions::with_max_table_len(Some(1))).unwrap();

        prop_assert_eq!(exact.method, Method::Exact);
        prop_assert_eq!(bounded.method, Method::Heuristic);
        prop_assert!(bounded.total_items >= exact.total_items);
        if bounded.total_items == exact.total_items {
            prop_assert!(bounded.total_packs >= exact.total_packs);
        }
    }
}
