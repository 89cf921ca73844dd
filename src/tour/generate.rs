//! Exhaustive ordering generation.
//!
//! Both generators return all K! orderings. This is brute force on purpose:
//! the point sets are tiny (K = 4 gives 24 orderings) and the exercise is to
//! compare two ways of enumerating, not to scale. Callers that accept
//! outside input check [`MAX_POINTS`] first.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::point::{Path, Point};
use crate::error::{LabError, LabResult};

/// Largest point set enumerated from outside input.
///
/// 9! = 362,880 orderings; one more point multiplies memory by ten.
pub const MAX_POINTS: usize = 9;

/// Reject point sets too large to enumerate.
pub(crate) fn check_point_count(count: usize, line: usize) -> LabResult<()> {
    if count > MAX_POINTS {
        return Err(LabError::input(
            line,
            format!("{count} points exceed the enumeration limit of {MAX_POINTS}"),
        ));
    }
    Ok(())
}

/// Which enumeration algorithm to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Generator {
    /// Extend every partial ordering by every unused point, level by level.
    BuildUp,
    /// `Itertools::permutations`.
    #[default]
    Library,
}

impl Generator {
    /// Every generator, in reporting order.
    pub const ALL: [Self; 2] = [Self::BuildUp, Self::Library];

    /// Name used in reports and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BuildUp => "build-up",
            Self::Library => "library",
        }
    }

    /// All orderings of `points`.
    #[must_use]
    pub fn orderings(self, points: &[Point]) -> Vec<Path> {
        match self {
            Self::BuildUp => build_up_orderings(points),
            Self::Library => library_orderings(points),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "build-up" | "buildup" | "build_up" => Ok(Self::BuildUp),
            "library" | "lib" => Ok(Self::Library),
            other => Err(LabError::config(format!(
                "unknown generator '{other}' (expected build-up or library)"
            ))),
        }
    }
}

/// Grow orderings one position at a time.
///
/// Works over input positions rather than coordinates, so two points at the
/// same location are still distinct and the result always has K! entries.
#[must_use]
pub fn build_up_orderings(points: &[Point]) -> Vec<Path> {
    let k = points.len();
    let mut partial: Vec<Vec<usize>> = vec![Vec::new()];

    for _ in 0..k {
        let mut next = Vec::with_capacity(partial.len() * k);
        for prefix in &partial {
            for idx in (0..k).filter(|idx| !prefix.contains(idx)) {
                let mut extended = Vec::with_capacity(prefix.len() + 1);
                extended.extend_from_slice(prefix);
                extended.push(idx);
                next.push(extended);
            }
        }
        partial = next;
    }

    partial
        .into_iter()
        .map(|order| order.into_iter().map(|i| points[i]).collect::<Path>())
        .collect()
}

/// Orderings from the `itertools` permutation adaptor.
#[must_use]
pub fn library_orderings(points: &[Point]) -> Vec<Path> {
    points
        .iter()
        .copied()
        .permutations(points.len())
        .map(Path::new)
        .collect()
}
