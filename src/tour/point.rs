//! Points and paths in the plane.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The four-point sample used when no input is given.
pub const SAMPLE_POINTS: [Point; 4] = [
    Point::new(1.0, 1.0),
    Point::new(2.0, 3.0),
    Point::new(3.0, 2.0),
    Point::new(4.0, 4.0),
];

/// A visiting order over every input point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Wrap an ordering.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The points in visiting order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path visits nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lengths of each consecutive segment.
    pub fn segment_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.windows(2).map(|w| w[0].distance_to(&w[1]))
    }

    /// Sum of segment lengths (open path, no return to start).
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.segment_lengths().sum()
    }

    /// Shortest segment, or `None` for paths with fewer than two points.
    #[must_use]
    pub fn min_segment(&self) -> Option<f64> {
        self.segment_lengths().reduce(f64::min)
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
