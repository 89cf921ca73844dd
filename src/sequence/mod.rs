//! Recurrence evaluator.
//!
//! F(1) = F(2) = 1 and, for n > 2,
//! F(n) = (-1)^n * (F(n-1) / (2n)! - 4 * F(n-2)).
//!
//! Two strategies compute the same values: [`CachedRecursive`] memoizes
//! across calls, [`TabulatedIterative`] rebuilds a table every call. Both
//! divide by an exact `(2n)!`.
//!
//! ```rust
//! use tourlab::sequence::{CachedRecursive, SequenceStrategy, TabulatedIterative};
//!
//! let mut rec = CachedRecursive::new();
//! let mut it = TabulatedIterative::new();
//! assert_eq!(rec.value(2)?, 1.0);
//! assert!((rec.value(15)? - it.value(15)?).abs() < 1e-9);
//! # Ok::<(), tourlab::LabError>(())
//! ```

mod factorial;
mod strategy;
mod timing;

pub use factorial::{div_big, factorial};
pub use strategy::{
    values_agree, CachedRecursive, SequenceStrategy, TabulatedIterative, MAX_SEQUENCE_INDEX,
};
pub use timing::{compare_strategies, time_value, SequenceRow, TimingMode};
