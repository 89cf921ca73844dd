//! Text input for point sets.
//!
//! ```text
//! 4
//! 1 1
//! 2 3
//! 3 2
//! 4 4
//! ```
//!
//! The first non-blank line is the point count K; each following non-blank
//! line holds two whitespace-separated coordinates. A count that disagrees
//! with the number of rows is a [`LabError::CountMismatch`], never a silent
//! truncation.

use std::path::Path as FsPath;

use super::generate::check_point_count;
use super::point::{Point, SAMPLE_POINTS};
use crate::error::{LabError, LabResult};

/// The built-in four-point sample.
#[must_use]
pub fn sample_points() -> Vec<Point> {
    SAMPLE_POINTS.to_vec()
}

/// Parse the `K` + rows text format.
///
/// # Errors
///
/// - `LabError::InputParse` for empty text, a bad count, a count above
///   [`MAX_POINTS`](super::MAX_POINTS), a row that is not exactly two
///   numbers, or a non-finite coordinate.
/// - `LabError::CountMismatch` when K differs from the number of rows.
pub fn parse_points(text: &str) -> LabResult<Vec<Point>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_text) = lines
        .next()
        .ok_or_else(|| LabError::input(0, "no input: expected point count on the first line"))?;
    let declared: usize = count_text.parse().map_err(|_| {
        LabError::input(
            count_line,
            format!("expected a point count, got '{count_text}'"),
        )
    })?;
    if declared == 0 {
        return Err(LabError::input(count_line, "point count must be at least 1"));
    }
    check_point_count(declared, count_line)?;

    let points = lines
        .map(|(line_no, line)| parse_row(line_no, line))
        .collect::<LabResult<Vec<_>>>()?;

    if points.len() != declared {
        return Err(LabError::CountMismatch {
            declared,
            supplied: points.len(),
        });
    }
    Ok(points)
}

fn parse_row(line_no: usize, line: &str) -> LabResult<Point> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(LabError::input(
            line_no,
            format!("expected two coordinates, got {}", fields.len()),
        ));
    }
    let coord = |tok: &str| -> LabResult<f64> {
        let v: f64 = tok
            .parse()
            .map_err(|_| LabError::input(line_no, format!("'{tok}' is not a number")))?;
        if v.is_finite() {
            Ok(v)
        } else {
            Err(LabError::input(line_no, format!("'{tok}' is not finite")))
        }
    };
    Ok(Point::new(coord(fields[0])?, coord(fields[1])?))
}

/// Read and parse a points file.
///
/// # Errors
///
/// Returns `LabError::Io` if the file cannot be read, otherwise the errors of
/// [`parse_points`].
pub fn load_points<P: AsRef<FsPath>>(path: P) -> LabResult<Vec<Point>> {
    let content = std::fs::read_to_string(path)?;
    parse_points(&content)
}
