//! Configuration for bootstrap runs

use crate::api::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_REPETITIONS};
use crate::methods::IntervalMethod;
use crate::types::ConfidenceLevel;
use bootstrap_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default base seed
pub const DEFAULT_SEED: u64 = 42;

/// Parameters of a bootstrap run
///
/// Missing fields take their defaults when deserializing, so
/// `{"repetitions": 2000}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Number of resamples (`R`)
    pub repetitions: usize,
    /// Confidence level in (0, 1)
    pub confidence_level: f64,
    /// Base seed; resample `i` draws from a stream derived from it
    pub seed: u64,
    /// How intervals are read off the distribution
    pub method: IntervalMethod,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            seed: DEFAULT_SEED,
            method: IntervalMethod::Percentile,
        }
    }
}

impl BootstrapConfig {
    /// Check every parameter, failing with [`Error::InvalidInput`]
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(Error::InvalidInput(
                "Number of repetitions must be positive".to_string(),
            ));
        }
        ConfidenceLevel::new(self.confidence_level)?;
        Ok(())
    }

    /// Validated confidence level
    pub fn level(&self) -> Result<ConfidenceLevel> {
        ConfidenceLevel::new(self.confidence_level)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
