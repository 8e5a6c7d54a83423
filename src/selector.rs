//! Strategy selection for order statistics.
//!
//! [`select_in_place`] works on the caller's buffer and leaves it reordered. The `nth_smallest*`
//! functions copy the input into an owned working buffer first and never touch the caller's data.

use std::fmt;
use std::str::FromStr;

use crate::error::{SelectError, StrategyParseError};
use crate::heap::HeapSelect;
use crate::select::{PivotRule, QuickSelect};

/// Which selection algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Quickselect. O(N) on average, O(N²) worst case.
    Partition(PivotRule),
    /// Bounded max-heap. O(N log K) on every input.
    Heap,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Partition(PivotRule::default())
    }
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Partition(PivotRule::Last) => "partition",
            Strategy::Partition(PivotRule::Middle) => "partition:middle",
            Strategy::Partition(PivotRule::MedianOfThree) => "partition:median3",
            Strategy::Heap => "heap",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `heap`, `partition` and `partition:<pivot>` where `<pivot>` is any [`PivotRule`] name.
impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let (head, pivot) = match lowered.split_once(':') {
            Some((head, pivot)) => (head, Some(pivot)),
            None => (lowered.as_str(), None),
        };
        match (head, pivot) {
            ("heap", None) => Ok(Strategy::Heap),
            ("partition" | "quickselect", None) => Ok(Strategy::default()),
            ("partition" | "quickselect", Some(pivot)) => pivot
                .parse()
                .map(Strategy::Partition)
                .map_err(|_| StrategyParseError(s.to_owned())),
            _ => Err(StrategyParseError(s.to_owned())),
        }
    }
}

/// Runs `strategy` directly on `values`, reordering it.
pub fn select_in_place<T: Ord + Clone>(
    values: &mut [T],
    k: usize,
    strategy: Strategy,
) -> Result<T, SelectError> {
    tracing::trace!(strategy = strategy.name(), len = values.len(), k, "select");
    match strategy {
        Strategy::Partition(pivot) => QuickSelect::with_pivot(pivot).nth_smallest(values, k),
        Strategy::Heap => HeapSelect::nth_smallest(values, k),
    }
}

/// The `k`-th smallest (1-based) of `values` using the default strategy. `values` is not modified.
pub fn nth_smallest<T: Ord + Clone>(values: &[T], k: usize) -> Result<T, SelectError> {
    nth_smallest_with(values, k, Strategy::default())
}

pub fn nth_smallest_with<T: Ord + Clone>(
    values: &[T],
    k: usize,
    strategy: Strategy,
) -> Result<T, SelectError> {
    crate::error::check_rank(k, values.len())?;
    let mut work = values.to_vec();
    select_in_place(&mut work, k, strategy)
}

/// Integer form returning `-1` for an invalid rank.
pub fn nth_smallest_or_sentinel(values: &[i64], k: usize) -> i64 {
    nth_smallest(values, k).unwrap_or(-1)
}
