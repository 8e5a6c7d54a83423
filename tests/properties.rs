//! Property tests for selection and bag equalization.
//!
//! Uses proptest to verify:
//! 1. Every strategy returns the sorted element at rank k
//! 2. Ranks outside 1..=len are rejected
//! 3. min_cost is symmetric, zero on identical bags, and feasible exactly when all imbalances are even
//! 4. min_cost matches an exhaustive search over swap sequences on tiny bags

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use proptest::prelude::*;
use swapsel::{EqualizeError, PivotRule, Strategy as Select, min_cost, nth_smallest_with};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_select() -> impl Strategy<Value = Select> {
    prop_oneof![
        Just(Select::Partition(PivotRule::Last)),
        Just(Select::Partition(PivotRule::Middle)),
        Just(Select::Partition(PivotRule::MedianOfThree)),
        Just(Select::Heap),
    ]
}

fn arb_values_and_rank() -> impl Strategy<Value = (Vec<i32>, usize)> {
    prop::collection::vec(-50..50i32, 1..80).prop_flat_map(|v| {
        let len = v.len();
        (Just(v), 1..=len)
    })
}

fn arb_bag_pair(max_len: usize, max_value: u64) -> impl Strategy<Value = (Vec<u64>, Vec<u64>)> {
    (0..=max_len).prop_flat_map(move |len| {
        (
            prop::collection::vec(1..=max_value, len),
            prop::collection::vec(1..=max_value, len),
        )
    })
}

/// Reference answer: Dijkstra over (sorted a, sorted b) states, one swap per edge.
fn brute_force_cost(a: &[u64], b: &[u64]) -> Option<u64> {
    let normalize = |mut v: Vec<u64>| {
        v.sort_unstable();
        v
    };
    let start = (normalize(a.to_vec()), normalize(b.to_vec()));
    let mut best: HashMap<(Vec<u64>, Vec<u64>), u64> = HashMap::new();
    let mut done = HashSet::new();
    let mut queue = BinaryHeap::new();
    best.insert(start.clone(), 0);
    queue.push(Reverse((0u64, start)));

    while let Some(Reverse((cost, state))) = queue.pop() {
        if !done.insert(state.clone()) {
            continue;
        }
        if state.0 == state.1 {
            return Some(cost);
        }
        let (sa, sb) = &state;
        for i in 0..sa.len() {
            for j in 0..sb.len() {
                let mut na = sa.clone();
                let mut nb = sb.clone();
                std::mem::swap(&mut na[i], &mut nb[j]);
                let next = (normalize(na), normalize(nb));
                let next_cost = cost + sa[i].min(sb[j]);
                if best.get(&next).is_none_or(|&c| next_cost < c) {
                    best.insert(next.clone(), next_cost);
                    queue.push(Reverse((next_cost, next)));
                }
            }
        }
    }
    None
}

fn all_imbalances_even(a: &[u64], b: &[u64]) -> bool {
    let mut counts: HashMap<u64, i64> = HashMap::new();
    for &v in a {
        *counts.entry(v).or_default() += 1;
    }
    for &v in b {
        *counts.entry(v).or_default() -= 1;
    }
    counts.values().all(|c| c % 2 == 0)
}

// ── 1. Selection matches sort ────────────────────────────────────────

proptest! {
    #[test]
    fn selection_matches_sort((values, k) in arb_values_and_rank(), strategy in arb_select()) {
        let mut sorted = values.clone();
        sorted.sort_unstable();
        prop_assert_eq!(nth_smallest_with(&values, k, strategy), Ok(sorted[k - 1]));
    }

    #[test]
    fn strategies_agree((values, k) in arb_values_and_rank()) {
        let partition = nth_smallest_with(&values, k, Select::default());
        let heap = nth_smallest_with(&values, k, Select::Heap);
        prop_assert_eq!(partition, heap);
    }

    // ── 2. Rank guard ────────────────────────────────────────────────

    #[test]
    fn rank_out_of_range_rejected(values in prop::collection::vec(any::<i32>(), 1..40), extra in 1..10usize, strategy in arb_select()) {
        prop_assert!(nth_smallest_with(&values, 0, strategy).is_err());
        prop_assert!(nth_smallest_with(&values, values.len() + extra, strategy).is_err());
    }

    // ── 3. Equalizer invariants ──────────────────────────────────────

    #[test]
    fn min_cost_symmetric((a, b) in arb_bag_pair(24, 12)) {
        prop_assert_eq!(min_cost(&a, &b), min_cost(&b, &a).map_err(|e| match e {
            EqualizeError::Infeasible { value, imbalance } => EqualizeError::Infeasible { value, imbalance: -imbalance },
            other => other,
        }));
    }

    #[test]
    fn min_cost_zero_on_identical(a in prop::collection::vec(1..1_000u64, 0..40)) {
        prop_assert_eq!(min_cost(&a, &a), Ok(0));
        let mut shuffled = a.clone();
        shuffled.reverse();
        prop_assert_eq!(min_cost(&a, &shuffled), Ok(0));
    }

    #[test]
    fn feasible_iff_even((a, b) in arb_bag_pair(24, 6)) {
        let result = min_cost(&a, &b);
        if all_imbalances_even(&a, &b) {
            prop_assert!(result.is_ok());
        } else {
            let is_infeasible = matches!(result, Err(EqualizeError::Infeasible { .. }));
            prop_assert!(is_infeasible);
        }
    }

    // ── 4. Exhaustive cross-check ────────────────────────────────────

    #[test]
    fn min_cost_matches_brute_force((a, b) in arb_bag_pair(4, 5)) {
        prop_assert_eq!(min_cost(&a, &b).ok(), brute_force_cost(&a, &b));
    }
}
