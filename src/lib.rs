//! Two small selection problems over in-memory slices.
//!
//! - [`equalize`]: minimum swap cost to make two bags identical as multisets.
//! - [`select`], [`heap`], [`selector`]: the k-th smallest element, by quickselect or by a
//!   bounded max-heap, behind one dispatcher.
//!
//! ```
//! use swapsel::{Strategy, min_cost, nth_smallest, nth_smallest_with};
//!
//! assert_eq!(nth_smallest(&[3, 1, 4, 1, 5, 9, 2, 6], 8), Ok(9));
//! assert_eq!(nth_smallest_with(&[3, 1, 4], 2, Strategy::Heap), Ok(3));
//! assert_eq!(min_cost(&[4, 4, 2, 2], &[1, 1, 2, 2]), Ok(1));
//! ```
pub mod equalize;
pub mod error;
pub mod heap;
pub mod select;
pub mod selector;

pub use equalize::{Ledger, min_cost, min_cost_or_sentinel};
pub use error::{EqualizeError, SelectError, StrategyParseError};
pub use heap::HeapSelect;
pub use select::{PivotRule, QuickSelect};
pub use selector::{
    Strategy, nth_smallest, nth_smallest_or_sentinel, nth_smallest_with, select_in_place,
};
