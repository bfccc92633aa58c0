//! Error types for montepi.
//!
//! Every fallible operation returns `Result<T, PiError>`. An invalid
//! region or batch size is reported before any sampling starts, so a
//! failed run never produces a partial batch or a misleading estimate.

use thiserror::Error;

/// Result type alias for montepi operations.
pub type PiResult<T> = Result<T, PiError>;

/// Unified error type for all montepi operations.
#[derive(Debug, Error)]
pub enum PiError {
    // ===== Input Errors =====
    /// Region bounds are inverted, empty, or not square.
    #[error("Invalid region: {reason}")]
    InvalidRegion {
        /// Why the region was rejected.
        reason: String,
    },

    /// Batch size is zero, negative, or above the per-batch limit.
    #[error(
        "Invalid batch size {value}: must be a positive integer no greater than {}",
        crate::estimator::MAX_BATCH_SIZE
    )]
    InvalidBatchSize {
        /// The rejected value.
        value: i64,
    },

    /// Batch-size text does not parse to an integer.
    #[error("Non-numeric input '{input}': expected a positive integer")]
    NonNumericInput {
        /// The raw text supplied by the user.
        input: String,
    },

    // ===== Session Errors =====
    /// Another run is in flight on a shared session.
    #[error("A simulation run is already in progress")]
    RunInProgress,

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

impl PiError {
    /// Create an invalid-region error.
    #[must_use]
    pub fn invalid_region(reason: impl Into<String>) -> Self {
        Self::InvalidRegion {
            reason: reason.into(),
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

    /// Check if this error came from user-supplied input rather than the
    /// environment (files, locks, encoders).
    #[must_use]
    pub const fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidRegion { .. } | Self::InvalidBatchSize { .. } | Self::NonNumericInput { .. }
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_input_rejection_detection() {
        assert!(PiError::invalid_region("right <= left").is_input_rejection());
        assert!(PiError::InvalidBatchSize { value: 0 }.is_input_rejection());
        assert!(PiError::NonNumericInput {
            input: "abc".to_string()
        }
        .is_input_rejection());

        assert!(!PiError::RunInProgress.is_input_rejection());
        assert!(!PiError::config("bad").is_input_rejection());
    }

    #[test]
    fn test_error_invalid_region_display() {
        let err = PiError::invalid_region("width 10 != height 12");
        let msg = err.to_string();
        assert!(msg.contains("Invalid region"));
        assert!(msg.contains("width 10 != height 12"));
    }

    #[test]
    fn test_error_invalid_batch_size_display() {
        let err = PiError::InvalidBatchSize { value: -3 };
        let msg = err.to_string();
        assert!(msg.contains("-3"));
        assert!(msg.contains("positive integer"));
    }

    #[test]
    fn test_error_non_numeric_display() {
        let err = PiError::NonNumericInput {
            input: "ten".to_string(),
        };
        assert!(err.to_string().contains("'ten'"));
    }

    #[test]
    fn test_error_run_in_progress_display() {
        assert!(PiError::RunInProgress.to_string().contains("in progress"));
    }

    #[test]
    fn test_error_config() {
        let err = PiError::config("invalid parameter");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("invalid parameter"));
    }

    #[test]
    fn test_error_serialization() {
        let err = PiError::serialization("failed to serialize");
        let msg = err.to_string();
        assert!(msg.contains("Serialization error"));
        assert!(msg.contains("failed to serialize"));
    }

    #[test]
    fn test_error_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
        let err: PiError = io.into();
        assert!(err.to_string().contains("I/O error"));
        assert!(!err.is_input_rejection());
    }

    #[test]
    fn test_error_yaml_from() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: PiError = yaml_err.into();
        assert!(err.to_string().contains("YAML parsing error"));
    }

    #[test]
    fn test_error_debug() {
        let err = PiError::config("test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("Config"));
    }
}
