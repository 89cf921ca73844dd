//! Error types for tourlab.
//!
//! Every fallible operation returns `Result<T, LabError>`; nothing in the
//! library panics on bad input. The CLI reports errors at its boundary.

use thiserror::Error;

/// Result type alias for tourlab operations.
pub type LabResult<T> = Result<T, LabError>;

/// Unified error type for all tourlab operations.
#[derive(Debug, Error)]
pub enum LabError {
    // ===== Input Errors =====
    /// Malformed point input (bad number, wrong field count, empty text).
    #[error("Input error on line {line}: {message}")]
    InputParse {
        /// 1-based line number in the input text (0 when not line specific).
        line: usize,
        /// Human-readable description.
        message: String,
    },

    /// Declared point count does not match the number of coordinate rows.
    #[error("Input count mismatch: declared {declared} points, supplied {supplied}")]
    CountMismatch {
        /// Count from the first input line.
        declared: usize,
        /// Number of coordinate rows actually present.
        supplied: usize,
    },

    // ===== Sequence Errors =====
    /// Sequence index outside the domain n >= 1.
    #[error("Sequence index {0} is out of domain (n must be >= 1)")]
    InvalidIndex(u64),

    /// Sequence index past the largest index evaluated.
    #[error("Sequence index {index} exceeds the supported maximum {max}")]
    IndexOutOfRange {
        /// Requested index.
        index: u64,
        /// Largest supported index.
        max: u64,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LabError {
    /// Create an input parse error for a given line.
    #[must_use]
    pub fn input(line: usize, message: impl Into<String>) -> Self {
        Self::InputParse {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error was caused by the user's point input.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InputParse { .. } | Self::CountMismatch { .. })
    }
}

impl From<serde_json::Error> for LabError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
