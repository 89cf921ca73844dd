//! Scoring and constraint filtering.

use serde::{Deserialize, Serialize};

use super::point::Path;
use crate::error::{LabError, LabResult};

/// Default minimum spacing between consecutive points.
pub const DEFAULT_MIN_DISTANCE: f64 = 1.5;

/// Default maximum total path length.
pub const DEFAULT_MAX_TOTAL_DISTANCE: f64 = 10.0;

/// Thresholds an ordering must satisfy to be retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Every consecutive pair must be at least this far apart.
    pub min_distance: f64,
    /// The whole path must be no longer than this.
    pub max_total_distance: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DISTANCE, DEFAULT_MAX_TOTAL_DISTANCE)
    }
}

impl Constraints {
    /// Create constraints.
    #[must_use]
    pub const fn new(min_distance: f64, max_total_distance: f64) -> Self {
        Self {
            min_distance,
            max_total_distance,
        }
    }

    /// Check the thresholds are usable.
    ///
    /// # Errors
    ///
    /// Returns `LabError::Config` if either threshold is negative or not finite.
    pub fn validate(&self) -> LabResult<()> {
        for (name, value) in [
            ("min_distance", self.min_distance),
            ("max_total_distance", self.max_total_distance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LabError::config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Every consecutive segment meets `min_distance`.
    ///
    /// Vacuously true for paths with fewer than two points.
    #[must_use]
    pub fn spacing_ok(&self, path: &Path) -> bool {
        path.segment_lengths().all(|d| d >= self.min_distance)
    }

    /// The path's total length if it satisfies both thresholds.
    #[must_use]
    pub fn admits(&self, path: &Path) -> Option<f64> {
        if !self.spacing_ok(path) {
            return None;
        }
        let total = path.total_length();
        (total <= self.max_total_distance).then_some(total)
    }
}

/// An ordering retained by the filter, with its total length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPath {
    /// The ordering.
    pub path: Path,
    /// Its total length.
    pub length: f64,
}

/// Keep the orderings that satisfy `constraints`, in input order.
#[must_use]
pub fn filter_optimal(paths: &[Path], constraints: &Constraints) -> Vec<ScoredPath> {
    paths
        .iter()
        .filter_map(|path| {
            constraints.admits(path).map(|length| ScoredPath {
                path: path.clone(),
                length,
            })
        })
        .collect()
}
