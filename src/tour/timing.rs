//! Repeated-run timing of the two generators.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::generate::Generator;
use super::point::Point;
use crate::error::{LabError, LabResult};

/// Default number of repetitions per generator.
pub const DEFAULT_TIMING_ITERATIONS: u32 = 1000;

/// Total wall-clock time for each generator over the same workload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorTiming {
    /// Repetitions per generator.
    pub iterations: u32,
    /// Orderings produced by a single run.
    pub orderings: usize,
    /// Total seconds for the build-up generator.
    pub build_up_secs: f64,
    /// Total seconds for the library generator.
    pub library_secs: f64,
}

impl GeneratorTiming {
    /// The generator with the smaller total time (build-up on a tie).
    #[must_use]
    pub fn faster(&self) -> Generator {
        if self.build_up_secs <= self.library_secs {
            Generator::BuildUp
        } else {
            Generator::Library
        }
    }

    /// Seconds recorded for `generator`.
    #[must_use]
    pub fn secs(&self, generator: Generator) -> f64 {
        match generator {
            Generator::BuildUp => self.build_up_secs,
            Generator::Library => self.library_secs,
        }
    }
}

fn time_generator(generator: Generator, points: &[Point], iterations: u32) -> (usize, Duration) {
    let mut produced = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        produced = black_box(generator.orderings(black_box(points))).len();
    }
    (produced, start.elapsed())
}

/// Run each generator `iterations` times over `points`.
///
/// # Errors
///
/// Returns `LabError::Config` if `iterations` is zero or `points` is empty,
/// and `LabError::InputParse` if `points` is larger than
/// [`MAX_POINTS`](super::MAX_POINTS).
pub fn compare_generators(points: &[Point], iterations: u32) -> LabResult<GeneratorTiming> {
    if iterations == 0 {
        return Err(LabError::config("timing iterations must be at least 1"));
    }
    if points.is_empty() {
        return Err(LabError::config("cannot time generators on an empty point set"));
    }
    super::generate::check_point_count(points.len(), 0)?;

    let (build_up_count, build_up) = time_generator(Generator::BuildUp, points, iterations);
    let (library_count, library) = time_generator(Generator::Library, points, iterations);
    debug_assert_eq!(build_up_count, library_count);
    log::debug!(
        "{iterations} runs: build-up {build_up:?}, library {library:?} ({build_up_count} orderings each)"
    );

    Ok(GeneratorTiming {
        iterations,
        orderings: build_up_count,
        build_up_secs: build_up.as_secs_f64(),
        library_secs: library.as_secs_f64(),
    })
}
