//! Partition-based order-statistic selection.
use std::str::FromStr;

use crate::error::{SelectError, StrategyParseError, check_rank};

/// How the pivot of the active range is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PivotRule {
    /// Last element of the range.
    #[default]
    Last,
    /// Middle element of the range.
    Middle,
    /// Median of the first, middle and last elements.
    MedianOfThree,
}

impl PivotRule {
    /// Index of the pivot within `left..=right`.
    fn choose<T: Ord>(self, data: &[T], left: usize, right: usize) -> usize {
        let mid = left + (right - left) / 2;
        match self {
            PivotRule::Last => right,
            PivotRule::Middle => mid,
            PivotRule::MedianOfThree => {
                let mut idx = [left, mid, right];
                if data[idx[1]] < data[idx[0]] {
                    idx.swap(0, 1);
                }
                if data[idx[2]] < data[idx[1]] {
                    idx.swap(1, 2);
                }
                if data[idx[1]] < data[idx[0]] {
                    idx.swap(0, 1);
                }
                idx[1]
            }
        }
    }
}

impl FromStr for PivotRule {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(PivotRule::Last),
            "middle" | "mid" => Ok(PivotRule::Middle),
            "median3" | "median-of-three" => Ok(PivotRule::MedianOfThree),
            _ => Err(StrategyParseError(s.to_owned())),
        }
    }
}

/// Quickselect is a selection algorithm to find the kth smallest element in an unordered list.
///
/// Quickselect has a good average-case performance and is very cache friendly and in cases where
/// you need a Top-K when K > √N it gives better algorithmic performance due to O(N) being somewhat
/// less than O(N log K). The worst case is O(N²), reachable with [`PivotRule::Last`] on sorted
/// input; [`PivotRule::MedianOfThree`] avoids that pattern without changing any result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickSelect {
    pivot: PivotRule,
}

impl QuickSelect {
    pub fn with_pivot(pivot: PivotRule) -> Self {
        Self { pivot }
    }

    /// Lomuto partition scheme as used in quicksort.
    ///
    /// Partitions `left..=right` around `data[pivot]`: elements `<=` the pivot end up before it,
    /// larger ones after it. Returns the pivot's final index. Elements outside the range are not
    /// touched.
    ///
    /// Requires `left <= pivot <= right < data.len()` whenever `left < right`.
    pub fn partition<T: Ord>(data: &mut [T], left: usize, right: usize, pivot: usize) -> usize {
        if data.is_empty() || left >= right {
            return left;
        }
        debug_assert!(
            left <= pivot && pivot <= right && right < data.len(),
            "pivot {pivot} outside {left}..={right} of {} elements",
            data.len()
        );
        // Move pivot to the end.
        data.swap(pivot, right);
        let mut store = left;

        for i in left..right {
            if data[i] <= data[right] {
                data.swap(store, i);
                store += 1;
            }
        }

        // Move pivot to its final place.
        data.swap(right, store);

        store
    }

    /// Reorders `data` so that `data[index]` holds the value it would hold if `data` were sorted,
    /// with `<=` values before it and `>=` values after it. Out-of-bounds `index` is a no-op.
    pub fn partition_at<T: Ord>(&self, data: &mut [T], index: usize) {
        if index >= data.len() {
            return;
        }
        let mut left = 0;
        let mut right = data.len() - 1;
        while left < right {
            let pivot = self.pivot.choose(data, left, right);
            let pos = Self::partition(data, left, right, pivot);

            if index == pos {
                return;
            } else if index < pos {
                right = pos - 1;
            } else {
                left = pos + 1;
            }
        }
    }

    /// Returns the `k`-th smallest element (1-based) of `data`.
    ///
    /// Destructive: on success `data[k - 1]` holds the answer, everything before it is `<=` and
    /// everything after it is `>=`, so the `k` smallest values occupy `data[..k]`.
    pub fn nth_smallest<T: Ord + Clone>(&self, data: &mut [T], k: usize) -> Result<T, SelectError> {
        check_rank(k, data.len())?;
        self.partition_at(data, k - 1);
        Ok(data[k - 1].clone())
    }
}
