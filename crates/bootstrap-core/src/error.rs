//! Error types for bootstrap resampling
//!
//! Provides a unified error type for all bootstrap-stats crates.

use thiserror::Error;

/// Core error type for bootstrap operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input data or parameters (empty sample, zero repetitions,
    /// confidence level outside (0, 1), ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A statistic could not be evaluated
    ///
    /// `resample` is the zero-based index of the failing resample, or `None`
    /// when the statistic failed on the original sample.
    #[error("{}", statistic_message(.resample, .message))]
    Statistic {
        resample: Option<usize>,
        message: String,
    },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

fn statistic_message(resample: &Option<usize>, message: &str) -> String {
    match resample {
        Some(index) => format!("Statistic failed on resample {index}: {message}"),
        None => format!("Statistic failed on original sample: {message}"),
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires at least one observation"))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_level(level: f64) -> Self {
        Self::InvalidInput(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create a statistic error with no resample attached yet
    pub fn statistic(message: impl Into<String>) -> Self {
        Self::Statistic {
            resample: None,
            message: message.into(),
        }
    }

    /// Attach the resample index to a statistic error
    ///
    /// Other variants pass through untouched, except that they are wrapped
    /// as statistic failures since they originated inside the statistic.
    pub fn at_resample(self, index: usize) -> Self {
        match self {
            Self::Statistic { message, .. } => Self::Statistic {
                resample: Some(index),
                message,
            },
            other => Self::Statistic {
                resample: Some(index),
                message: other.to_string(),
            },
        }
    }

    /// Whether this is an input validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Whether this is a statistic evaluation error
    pub fn is_statistic(&self) -> bool {
        matches!(self, Self::Statistic { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("repetitions must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid input: repetitions must be positive");

        let err = Error::Execution("thread pool exhausted".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool exhausted");

        let err = Error::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_statistic_display() {
        let err = Error::statistic("no success observations");
        assert_eq!(
            err.to_string(),
            "Statistic failed on original sample: no success observations"
        );

        let err = err.at_resample(17);
        assert_eq!(
            err.to_string(),
            "Statistic failed on resample 17: no success observations"
        );
    }

    #[test]
    fn test_at_resample_wraps_other_variants() {
        let err = Error::InvalidInput("empty".to_string()).at_resample(3);
        match err {
            Error::Statistic { resample, message } => {
                assert_eq!(resample, Some(3));
                assert!(message.contains("empty"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_helpers() {
        assert!(Error::empty_input("mean").is_invalid_input());
        assert!(Error::invalid_level(1.0).to_string().contains("(0, 1)"));
        assert!(Error::statistic("x").is_statistic());
        assert!(!Error::Execution("x".into()).is_statistic());
    }
}
