//! Bounded max-heap selection.
//!
//! Keeps the `k` smallest values seen so far in a max-heap laid out over `data[..k]`. Every later
//! element smaller than the root evicts it. After one pass the root is the largest of the `k`
//! smallest, i.e. the `k`-th smallest overall. O(N log K) time regardless of input order, which
//! makes it the better choice when K is small or when the worst case matters more than the average.

use crate::error::{SelectError, check_rank};

pub struct HeapSelect;

impl HeapSelect {
    /// Restores the max-heap property for the subtree rooted at `start`, considering only
    /// `data[..=end]`.
    pub fn sift_down<T: Ord>(data: &mut [T], start: usize, end: usize) {
        let mut parent = start;
        let mut child = 2 * parent + 1;

        while child <= end {
            // Pick the larger child.
            if child < end && data[child + 1] > data[child] {
                child += 1;
            }
            if data[parent] >= data[child] {
                break;
            }
            data.swap(parent, child);
            parent = child;
            child = 2 * parent + 1;
        }
    }

    /// Turns `data[..=end]` into a max-heap.
    pub fn heapify<T: Ord>(data: &mut [T], end: usize) {
        for i in (0..end.div_ceil(2)).rev() {
            Self::sift_down(data, i, end);
        }
    }

    /// Returns the `k`-th smallest element (1-based) of `data`.
    ///
    /// Destructive: on success `data[..k]` is a max-heap (not sorted) holding the `k` smallest
    /// values with the answer at `data[0]`. Elements are only ever swapped, so `data` remains a
    /// permutation of its input.
    pub fn nth_smallest<T: Ord + Clone>(data: &mut [T], k: usize) -> Result<T, SelectError> {
        check_rank(k, data.len())?;
        let end = k - 1;
        Self::heapify(data, end);

        for i in k..data.len() {
            if data[i] < data[0] {
                data.swap(0, i);
                Self::sift_down(data, 0, end);
            }
        }

        Ok(data[0].clone())
    }
}
