//! Constrained tour enumerator.
//!
//! Generates every ordering of a small point set, scores each by open path
//! length, and keeps the orderings whose consecutive spacing and total length
//! satisfy a [`Constraints`].
//!
//! ```rust
//! use tourlab::tour::{enumerate_tours, sample_points, Constraints, Generator};
//!
//! let report = enumerate_tours(&sample_points(), &Constraints::default(), Generator::BuildUp)?;
//! assert_eq!(report.orderings.len(), 24);
//! assert_eq!(report.optimal.len(), 12);
//! # Ok::<(), tourlab::LabError>(())
//! ```

mod filter;
mod generate;
mod input;
mod point;
mod timing;

pub use filter::{
    filter_optimal, Constraints, ScoredPath, DEFAULT_MAX_TOTAL_DISTANCE, DEFAULT_MIN_DISTANCE,
};
pub use generate::{build_up_orderings, library_orderings, Generator, MAX_POINTS};
pub use input::{load_points, parse_points, sample_points};
pub use point::{Path, Point, SAMPLE_POINTS};
pub use timing::{compare_generators, GeneratorTiming, DEFAULT_TIMING_ITERATIONS};

use serde::Serialize;

use crate::error::{LabError, LabResult};

/// Everything one enumeration run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourReport {
    /// Generator that produced the orderings.
    pub generator: Generator,
    /// Thresholds applied.
    pub constraints: Constraints,
    /// All K! orderings, in generation order.
    pub orderings: Vec<Path>,
    /// Orderings that passed both thresholds, in generation order.
    pub optimal: Vec<ScoredPath>,
}

/// Generate, score and filter all orderings of `points`.
///
/// # Errors
///
/// Returns `LabError::InputParse` for an empty point set or one larger than
/// [`MAX_POINTS`], and `LabError::Config` for unusable thresholds.
pub fn enumerate_tours(
    points: &[Point],
    constraints: &Constraints,
    generator: Generator,
) -> LabResult<TourReport> {
    if points.is_empty() {
        return Err(LabError::input(0, "at least one point is required"));
    }
    generate::check_point_count(points.len(), 0)?;
    if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
        return Err(LabError::input(0, format!("point {bad} is not finite")));
    }
    constraints.validate()?;

    let orderings = generator.orderings(points);
    let optimal = filter_optimal(&orderings, constraints);
    log::debug!(
        "{generator}: {} orderings of {} points, {} within constraints",
        orderings.len(),
        points.len(),
        optimal.len()
    );

    Ok(TourReport {
        generator,
        constraints: *constraints,
        orderings,
        optimal,
    })
}

/// Parse the text format and enumerate in one step.
///
/// # Errors
///
/// Any error of [`parse_points`] or [`enumerate_tours`]; no partial report is
/// produced.
pub fn enumerate_from_text(
    text: &str,
    constraints: &Constraints,
    generator: Generator,
) -> LabResult<TourReport> {
    let points = parse_points(text)?;
    enumerate_tours(&points, constraints, generator)
}
