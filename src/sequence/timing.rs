//! Per-n wall-clock comparison of the two strategies.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::strategy::{CachedRecursive, SequenceStrategy, TabulatedIterative};
use crate::error::{LabError, LabResult};

/// How the recursive cache is treated between measurements.
///
/// The iterative strategy keeps no state, so it is cold in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    /// One recursive instance is shared across every n; later calls reuse
    /// values memoized by earlier ones.
    #[default]
    Warm,
    /// The recursive cache is cleared before every measurement.
    Cold,
}

impl fmt::Display for TimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warm => write!(f, "warm"),
            Self::Cold => write!(f, "cold"),
        }
    }
}

impl FromStr for TimingMode {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "warm" => Ok(Self::Warm),
            "cold" => Ok(Self::Cold),
            other => Err(LabError::config(format!(
                "unknown timing mode '{other}' (expected warm or cold)"
            ))),
        }
    }
}

/// One line of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceRow {
    /// Sequence index.
    pub n: u64,
    /// F(n) from the cached recursive strategy.
    pub recursive: f64,
    /// F(n) from the tabulated iterative strategy.
    pub iterative: f64,
    /// Wall-clock seconds for the recursive call.
    pub recursive_secs: f64,
    /// Wall-clock seconds for the iterative call.
    pub iterative_secs: f64,
}

/// Time a single evaluation.
///
/// # Errors
///
/// Propagates the strategy's error.
pub fn time_value<S: SequenceStrategy + ?Sized>(
    strategy: &mut S,
    n: u64,
) -> LabResult<(f64, Duration)> {
    let start = Instant::now();
    let value = strategy.value(n)?;
    Ok((value, start.elapsed()))
}

/// Evaluate F(1..=max_n) with both strategies, timing each call once.
///
/// # Errors
///
/// Returns `LabError::InvalidIndex` if `max_n` is zero.
pub fn compare_strategies(max_n: u64, mode: TimingMode) -> LabResult<Vec<SequenceRow>> {
    if max_n < 1 {
        return Err(LabError::InvalidIndex(max_n));
    }

    let mut recursive = CachedRecursive::new();
    let mut iterative = TabulatedIterative::new();
    let mut rows = Vec::with_capacity(max_n as usize);

    for n in 1..=max_n {
        if mode == TimingMode::Cold {
            recursive.reset();
        }
        let (rec_value, rec_time) = time_value(&mut recursive, n)?;
        let (it_value, it_time) = time_value(&mut iterative, n)?;
        log::debug!(
            "F({n}): {} {rec_value} in {rec_time:?}, {} {it_value} in {it_time:?}",
            recursive.name(),
            iterative.name()
        );
        rows.push(SequenceRow {
            n,
            recursive: rec_value,
            iterative: it_value,
            recursive_secs: rec_time.as_secs_f64(),
            iterative_secs: it_time.as_secs_f64(),
        });
    }

    Ok(rows)
}
