//! # tourlab
//!
//! Two small numerical exercises with timing comparisons:
//! - [`sequence`]: F(n) = (-1)^n (F(n-1)/(2n)! - 4 F(n-2)) evaluated by a
//!   cached recursive and a tabulated iterative strategy.
//! - [`tour`]: every ordering of a small point set, filtered by minimum
//!   consecutive spacing and maximum total length.
//!
//! ## Example
//!
//! ```rust
//! use tourlab::prelude::*;
//!
//! let report = enumerate_tours(&sample_points(), &Constraints::default(), Generator::Library)?;
//! assert_eq!(report.orderings.len(), 24);
//!
//! let mut rec = CachedRecursive::new();
//! assert_eq!(rec.value(1)?, 1.0);
//! # Ok::<(), tourlab::LabError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::float_cmp,
    clippy::missing_const_for_fn,
    clippy::needless_range_loop,
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod sequence;
pub mod tour;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{LabConfig, LabConfigBuilder};
    pub use crate::error::{LabError, LabResult};
    pub use crate::sequence::{
        compare_strategies, CachedRecursive, SequenceStrategy, TabulatedIterative, TimingMode,
    };
    pub use crate::tour::{
        compare_generators, enumerate_tours, parse_points, sample_points, Constraints, Generator,
        Path, Point, ScoredPath, TourReport,
    };
}

/// Re-export for public API
pub use error::{LabError, LabResult};
