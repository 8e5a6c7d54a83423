//! Minimum-cost equalization of two bags by paired swaps.
//!
//! Swapping `a` from one bag with `b` from the other costs `min(a, b)`. Every value that one bag
//! holds in surplus has to travel half of that surplus to the other bag. Moves pair up one
//! outgoing value from each side. Pairing the cheapest half of all moving values against the
//! dearest half makes each pair cost exactly its cheaper member. A pair can also be routed through
//! the cheapest item anywhere (two swaps, each costing that minimum), so a moving value `v` costs
//! `min(v, 2 * global_min)`.

use std::collections::HashMap;
use std::iter;

use crate::error::EqualizeError;
use crate::select::{PivotRule, QuickSelect};

/// Signed per-value imbalance between two bags: positive counts are surplus in the first bag,
/// negative counts surplus in the second. Balanced values are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    counts: HashMap<u64, i64>,
    global_min: Option<u64>,
}

impl Ledger {
    pub fn from_bags(bag_a: &[u64], bag_b: &[u64]) -> Self {
        let mut counts: HashMap<u64, i64> = HashMap::new();
        for &v in bag_a {
            *counts.entry(v).or_default() += 1;
        }
        for &v in bag_b {
            *counts.entry(v).or_default() -= 1;
        }
        counts.retain(|_, c| *c != 0);

        Self {
            counts,
            global_min: bag_a.iter().chain(bag_b).copied().min(),
        }
    }

    /// Cheapest item across both bags, `None` when both are empty.
    pub fn global_min(&self) -> Option<u64> {
        self.global_min
    }

    pub fn imbalance(&self, value: u64) -> i64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// True when the bags already hold the same multiset.
    pub fn is_balanced(&self) -> bool {
        self.counts.is_empty()
    }

    /// Fails on the smallest value whose imbalance is odd.
    pub fn check_feasible(&self) -> Result<(), EqualizeError> {
        let odd = self
            .counts
            .iter()
            .filter(|&(_, &c)| c % 2 != 0)
            .min_by_key(|&(&v, _)| v);

        match odd {
            Some((&value, &imbalance)) => {
                tracing::debug!(value, imbalance, "bags cannot be equalized");
                Err(EqualizeError::Infeasible { value, imbalance })
            }
            None => Ok(()),
        }
    }

    /// Every value that has to change bags, once per unit moved, in no particular order.
    pub fn swap_candidates(&self) -> Vec<u64> {
        self.counts
            .iter()
            .flat_map(|(&v, &c)| iter::repeat_n(v, (c.unsigned_abs() / 2) as usize))
            .collect()
    }
}

/// Minimum total swap cost to make `bag_a` and `bag_b` equal as multisets.
pub fn min_cost(bag_a: &[u64], bag_b: &[u64]) -> Result<u64, EqualizeError> {
    if bag_a.len() != bag_b.len() {
        tracing::debug!(left = bag_a.len(), right = bag_b.len(), "bag lengths differ");
        return Err(EqualizeError::LengthMismatch {
            left: bag_a.len(),
            right: bag_b.len(),
        });
    }

    let ledger = Ledger::from_bags(bag_a, bag_b);
    ledger.check_feasible()?;

    let mut candidates = ledger.swap_candidates();
    let half = candidates.len() / 2;
    let Some(global_min) = ledger.global_min() else {
        return Ok(0);
    };
    if half == 0 {
        return Ok(0);
    }

    // Only the cheaper half is paid for.
    QuickSelect::with_pivot(PivotRule::MedianOfThree).partition_at(&mut candidates, half - 1);

    let relay = global_min.saturating_mul(2);
    let cost = candidates[..half]
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v.min(relay)))
        .ok_or(EqualizeError::CostOverflow)?;

    tracing::trace!(candidates = candidates.len(), global_min, cost, "equalized");
    Ok(cost)
}

/// [`min_cost`] as a plain integer: `-1` when the bags cannot be equalized (odd imbalance or
/// differing lengths). Feasible costs above `i64::MAX`, including ones that overflow `u64`,
/// saturate to `i64::MAX`, so `-1` never stands for a solvable input.
pub fn min_cost_or_sentinel(bag_a: &[u64], bag_b: &[u64]) -> i64 {
    match min_cost(bag_a, bag_b) {
        Ok(cost) => i64::try_from(cost).unwrap_or(i64::MAX),
        Err(EqualizeError::CostOverflow) => i64::MAX,
        Err(EqualizeError::Infeasible { .. } | EqualizeError::LengthMismatch { .. }) => -1,
    }
}
