//! Exact solver properties, checked against an exhaustive search on small inputs.

use proptest::prelude::*;

use packcalc::PackMap;
use packcalc::core::{Method, Score, SolveOptions, calculate_packs, calculate_packs_with};

/// Best score over every multiset of packs whose total stays below
/// `order + smallest size`, the range that always contains the optimum.
fn brute_force(sizes: &[u64], order: u64) -> Option<Score> {
    let smallest = *sizes.iter().min()?;
    let limit = order + smallest;
    let mut best: Option<Score> = None;
    search(sizes, order, limit, 0, 0, &mut best);
    best
}

fn search(sizes: &[u64], order: u64, limit: u64, items: u64, packs: u64, best: &mut Option<Score>) {
    let Some((&size, rest)) = sizes.split_first() else {
        if items >= order {
            let score = Score::new(items, packs);
            if best.as_ref().is_none_or(|current| score.is_better_than(current)) {
                *best = Some(score);
            }
        }
        return;
    };

    let mut count = 0;
    while items + count * size < limit {
        search(rest, order, limit, items + count * size, packs + count, best);
        count += 1;
    }
}

fn arb_sizes() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..=20, 1..=3)
}

fn distinct(sizes: &[i64]) -> Vec<u64> {
    let mut out: Vec<u64> = sizes.iter().map(|&size| size.unsigned_abs()).collect();
    out.sort_unstable();
    out.dedup();
    out
}

proptest! {
    #[test]
    fn matches_exhaustive_search(sizes in arb_sizes(), order in 1i64..=80) {
        let solved = calculate_packs_with(&sizes, order, &SolveOptions::default()).unwrap();
        let expected = brute_force(&distinct(&sizes), order.unsigned_abs()).unwrap();

        prop_assert_eq!(solved.method, Method::Exact);
        prop_assert_eq!(Score::new(solved.total_items, solved.total_packs), expected);
    }

    #[test]
    fn totals_agree_with_packs(sizes in arb_sizes(), order in 1i64..=2_000) {
        let solved = calculate_packs_with(&sizes, order, &SolveOptions::default()).unwrap();
        let items: u64 = solved.packs.iter().map(|(size, count)| size * count).sum();
        let packs: u64 = solved.packs.values().sum();

        prop_assert_eq!(solved.total_items, items);
        prop_assert_eq!(solved.total_packs, packs);
        prop_assert!(items >= order.unsigned_abs());
    }

    #[test]
    fn only_listed_sizes_with_positive_counts(sizes in arb_sizes(), order in 1i64..=2_000) {
        let packs = calculate_packs(&sizes, order).unwrap();
        let allowed = distinct(&sizes);
        for (size, count) in &packs {
            prop_assert!(allowed.contains(size));
            prop_assert!(*count > 0);
        }
    }

    #[test]
    fn exact_multiple_ships_exactly(size in 1i64..=500, multiple in 1i64..=50, extra in arb_sizes()) {
        let mut sizes = extra;
        sizes.push(size);
        let solved = calculate_packs_with(&sizes, size * multiple, &SolveOptions::default()).unwrap();
        prop_assert_eq!(solved.total_items, (size * multiple).unsigned_abs());
    }

    // Exact results only; the heuristic fallback can ship fewer items for a
    // larger order (sizes [6, 4, 3]: 7 items at order 5, 6 at order 6).
    #[test]
    fn total_items_never_shrink_as_order_grows(sizes in arb_sizes(), order in 1i64..=3_000) {
        let options = SolveOptions::default();
        let smaller = calculate_packs_with(&sizes, order, &options).unwrap();
        let larger = calculate_packs_with(&sizes, order + 1, &options).unwrap();

        prop_assert_eq!(smaller.method, Method::Exact);
        prop_assert_eq!(larger.method, Method::Exact);
        prop_assert!(larger.total_items >= smaller.total_items);
    }

    #[test]
    fn is_deterministic_and_order_independent(sizes in arb_sizes(), order in 1i64..=2_000) {
        let first = calculate_packs(&sizes, order).unwrap();
        let mut reversed = sizes.clone();
        reversed.reverse();
        prop_assert_eq!(&first, &calculate_packs(&sizes, order).unwrap());
        prop_assert_eq!(&first, &calculate_packs(&reversed, order).unwrap());
    }

    #[test]
    fn leaves_input_untouched(sizes in prop::collection::vec(1i64..=1_000, 0..6), order in 1i64..=5_000) {
        let before = sizes.clone();
        let _ = calculate_packs(&sizes, order);
        prop_assert_eq!(before, sizes);
    }

    #[test]
    fn errors_iff_non_positive_input(sizes in prop::collection::vec(-5i64..=30, 0..5), order in -5i64..=200) {
        let result = calculate_packs(&sizes, order);
        let invalid = order <= 0 || sizes.iter().any(|&size| size <= 0);
        prop_assert_eq!(result.is_err(), invalid);
        if let Err(err) = result {
            prop_assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn single_size_rounds_up(size in 1i64..=1_000, order in 1i64..=100_000) {
        let packs = calculate_packs(&[size], order).unwrap();
        let expected = (order + size - 1) / size;
        prop_assert_eq!(packs, PackMap::from([(size.unsigned_abs(), expected.unsigned_abs())]));
    }
}

#[test]
fn standard_and_coprime_sizes_are_monotone() {
    let options = SolveOptions::default();
    for sizes in [&[250i64, 500, 1000, 2000, 5000][..], &[23, 31, 53], &[25, 100]] {
        let mut previous = 0;
        for order in 1..=3_000 {
            let solved = calculate_packs_with(sizes, order, &options).unwrap();
            assert!(
                solved.total_items >= previous,
                "{sizes:?}: order {order} shipped {} after {previous}",
                solved.total_items
            );
            previous = solved.total_items;
        }
    }
}
