//! Configuration with YAML schema and validation.
//!
//! Every field has a default, so an empty document is a valid configuration
//! that reproduces the reference run: F(1..=15) with a warm cache, and the
//! four-point sample filtered at 1.5 / 10.0.
//!
//! ```yaml
//! schema_version: "1.0"
//! sequence:
//!   max_n: 15
//!   timing: warm
//! tour:
//!   min_distance: 1.5
//!   max_total_distance: 10.0
//!   generator: library
//!   timing_iterations: 1000
//!   points:
//!     - { x: 1, y: 1 }
//!     - { x: 2, y: 3 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{LabError, LabResult};
use crate::sequence::{TimingMode, MAX_SEQUENCE_INDEX};
use crate::tour::{
    sample_points, Constraints, Generator, Point, DEFAULT_MAX_TOTAL_DISTANCE,
    DEFAULT_MIN_DISTANCE, DEFAULT_TIMING_ITERATIONS, MAX_POINTS,
};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Sequence evaluator settings.
    #[validate(nested)]
    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Tour enumerator settings.
    #[validate(nested)]
    #[serde(default)]
    pub tour: TourConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl LabConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> LabResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> LabResult<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.check()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> LabResult<String> {
        serde_yaml::to_string(self).map_err(|e| LabError::serialization(e.to_string()))
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> LabConfigBuilder {
        LabConfigBuilder::default()
    }

    /// Run schema and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns `LabError::Validation` for schema violations and
    /// `LabError::Config` for semantic ones.
    pub fn check(&self) -> LabResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    fn validate_semantic(&self) -> LabResult<()> {
        self.tour.constraints().validate()?;
        if self.tour.points.len() > MAX_POINTS {
            return Err(LabError::input(
                0,
                format!(
                    "{} points exceed the enumeration limit of {MAX_POINTS}",
                    self.tour.points.len()
                ),
            ));
        }
        if let Some(bad) = self.tour.points.iter().find(|p| !p.is_finite()) {
            return Err(LabError::config(format!("point {bad} is not finite")));
        }
        Ok(())
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            sequence: SequenceConfig::default(),
            tour: TourConfig::default(),
        }
    }
}

/// Builder for [`LabConfig`].
#[derive(Debug, Default)]
pub struct LabConfigBuilder {
    max_n: Option<u64>,
    timing: Option<TimingMode>,
    constraints: Option<Constraints>,
    generator: Option<Generator>,
    timing_iterations: Option<u32>,
    points: Option<Vec<Point>>,
}

impl LabConfigBuilder {
    /// Set the largest sequence index evaluated.
    #[must_use]
    pub const fn max_n(mut self, max_n: u64) -> Self {
        self.max_n = Some(max_n);
        self
    }

    /// Set the recursive cache timing mode.
    #[must_use]
    pub const fn timing(mut self, mode: TimingMode) -> Self {
        self.timing = Some(mode);
        self
    }

    /// Set both filtering thresholds.
    #[must_use]
    pub const fn constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Set the ordering generator.
    #[must_use]
    pub const fn generator(mut self, generator: Generator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Set the repetitions used when timing generators.
    #[must_use]
    pub const fn timing_iterations(mut self, iterations: u32) -> Self {
        self.timing_iterations = Some(iterations);
        self
    }

    /// Set the point set.
    #[must_use]
    pub fn points(mut self, points: Vec<Point>) -> Self {
        self.points = Some(points);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> LabConfig {
        let mut config = LabConfig::default();

        if let Some(max_n) = self.max_n {
            config.sequence.max_n = max_n;
        }
        if let Some(mode) = self.timing {
            config.sequence.timing = mode;
        }
        if let Some(c) = self.constraints {
            config.tour.min_distance = c.min_distance;
            config.tour.max_total_distance = c.max_total_distance;
        }
        if let Some(generator) = self.generator {
            config.tour.generator = generator;
        }
        if let Some(iterations) = self.timing_iterations {
            config.tour.timing_iterations = iterations;
        }
        if let Some(points) = self.points {
            config.tour.points = points;
        }

        config
    }
}

/// Sequence evaluator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    /// Evaluate F(1..=max_n).
    #[validate(range(min = 1, max = MAX_SEQUENCE_INDEX))]
    #[serde(default = "default_max_n")]
    pub max_n: u64,

    /// Warm (shared cache) or cold (reset per measurement) timing.
    #[serde(default)]
    pub timing: TimingMode,
}

fn default_max_n() -> u64 {
    15
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            max_n: default_max_n(),
            timing: TimingMode::default(),
        }
    }
}

/// Tour enumerator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TourConfig {
    /// Minimum spacing between consecutive points.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,

    /// Maximum total path length.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_max_total_distance")]
    pub max_total_distance: f64,

    /// Ordering generator.
    #[serde(default)]
    pub generator: Generator,

    /// Repetitions per generator when comparing timings.
    #[validate(range(min = 1))]
    #[serde(default = "default_timing_iterations")]
    pub timing_iterations: u32,

    /// Points to enumerate.
    #[validate(length(min = 1))]
    #[serde(default = "sample_points")]
    pub points: Vec<Point>,
}

fn default_min_distance() -> f64 {
    DEFAULT_MIN_DISTANCE
}

fn default_max_total_distance() -> f64 {
    DEFAULT_MAX_TOTAL_DISTANCE
}

fn default_timing_iterations() -> u32 {
    DEFAULT_TIMING_ITERATIONS
}

impl TourConfig {
    /// The filtering thresholds.
    #[must_use]
    pub const fn constraints(&self) -> Constraints {
        Constraints::new(self.min_distance, self.max_total_distance)
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            min_distance: default_min_distance(),
            max_total_distance: default_max_total_distance(),
            generator: Generator::default(),
            timing_iterations: default_timing_iterations(),
            points: sample_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = LabConfig::default();

        assert_eq!(config.schema_version, "1.0");
        assert_eq!(config.sequence.max_n, 15);
        assert_eq!(config.sequence.timing, TimingMode::Warm);
        assert!((config.tour.min_distance - 1.5).abs() < f64::EPSILON);
        assert!((config.tour.max_total_distance - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.tour.generator, Generator::Library);
        assert_eq!(config.tour.timing_iterations, 1000);
        assert_eq!(config.tour.points.len(), 4);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = LabConfig::builder()
            .max_n(20)
            .timing(TimingMode::Cold)
            .constraints(Constraints::new(1.0, 8.0))
            .generator(Generator::BuildUp)
            .timing_iterations(10)
            .points(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)])
            .build();

        assert_eq!(config.sequence.max_n, 20);
        assert_eq!(config.sequence.timing, TimingMode::Cold);
        assert_eq!(config.tour.constraints(), Constraints::new(1.0, 8.0));
        assert_eq!(config.tour.generator, Generator::BuildUp);
        assert_eq!(config.tour.timing_iterations, 10);
        assert_eq!(config.tour.points.len(), 2);
    }

    #[test]
    fn test_config_empty_yaml_is_default() {
        let config = LabConfig::from_yaml("");
        assert_eq!(config.ok(), Some(LabConfig::default()));
    }

    #[test]
    fn test_config_yaml_parse() {
        let yaml = r"
sequence:
  max_n: 8
  timing: cold
tour:
  min_distance: 2.0
  generator: build-up
  points:
    - { x: 0, y: 0 }
    - { x: 3, y: 4 }
";
        let config = LabConfig::from_yaml(yaml);
        assert!(config.is_ok());

        let config = config.ok();
        assert_eq!(config.as_ref().map(|c| c.sequence.max_n), Some(8));
        assert_eq!(
            config.as_ref().map(|c| c.sequence.timing),
            Some(TimingMode::Cold)
        );
        assert_eq!(
            config.as_ref().map(|c| c.tour.generator),
            Some(Generator::BuildUp)
        );
        assert_eq!(
            config.as_ref().map(|c| c.tour.max_total_distance),
            Some(10.0)
        );
        assert_eq!(config.map(|c| c.tour.points.len()), Some(2));
    }

    #[test]
    fn test_config_rejects_zero_max_n() {
        let yaml = "sequence:\n  max_n: 0\n";
        assert!(matches!(
            LabConfig::from_yaml(yaml),
            Err(LabError::Validation(_))
        ));
    }

    #[test]
    fn test_config_max_n_bounds() {
        let config = LabConfig::builder().max_n(MAX_SEQUENCE_INDEX).build();
        assert!(config.check().is_ok());
        let config = LabConfig::builder().max_n(MAX_SEQUENCE_INDEX + 1).build();
        assert!(matches!(config.check(), Err(LabError::Validation(_))));
    }

    #[test]
    fn test_config_rejects_too_many_points() {
        let points = (0..=MAX_POINTS).map(|i| Point::new(i as f64, 0.0)).collect();
        let config = LabConfig::builder().points(points).build();
        assert!(matches!(config.check(), Err(LabError::InputParse { .. })));
    }

    #[test]
    fn test_config_rejects_negative_threshold() {
        let yaml = "tour:\n  min_distance: -0.5\n";
        assert!(LabConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_rejects_empty_points() {
        let yaml = "tour:\n  points: []\n";
        assert!(matches!(
            LabConfig::from_yaml(yaml),
            Err(LabError::Validation(_))
        ));
    }

    #[test]
    fn test_config_rejects_infinite_threshold() {
        let config = LabConfig::builder()
            .constraints(Constraints::new(1.0, f64::INFINITY))
            .build();
        assert!(matches!(config.check(), Err(LabError::Config { .. })));
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = "tour:\n  max_distance: 3.0\n";
        assert!(matches!(
            LabConfig::from_yaml(yaml),
            Err(LabError::YamlParse(_))
        ));
    }

    #[test]
    fn test_config_rejects_unknown_generator() {
        let yaml = "tour:\n  generator: heap\n";
        assert!(LabConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_yaml_roundtrip_preserves_points() {
        let config = LabConfig::default();
        let yaml = config.to_yaml().unwrap_or_default();
        assert!(yaml.contains("points"));
        let parsed = LabConfig::from_yaml(&yaml);
        assert_eq!(parsed.ok(), Some(config));
    }

    #[test]
    fn test_config_load_missing_file() {
        assert!(matches!(
            LabConfig::load("/nonexistent/tourlab.yaml"),
            Err(LabError::Io(_))
        ));
    }
}
