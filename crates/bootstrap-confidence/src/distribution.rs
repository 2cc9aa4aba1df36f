//! Bootstrap distributions
//!
//! A [`BootstrapDistribution`] holds one statistic value per resample, in
//! generation order. It is immutable once built; the sorted view needed for
//! quantiles is computed on first use and shared by every later interval
//! extraction.

use crate::methods::{BootstrapMethod, IntervalMethod, PercentileBootstrap};
use crate::types::{ConfidenceInterval, ConfidenceLevel};
use bootstrap_core::{Error, Result};
use bootstrap_quantile::quantile_sorted;
use serde::Serialize;
use std::sync::OnceLock;

/// Empirical distribution of a statistic over bootstrap resamples
#[derive(Debug, Clone)]
pub struct BootstrapDistribution {
    values: Vec<f64>,
    sample_size: Option<usize>,
    seed: Option<u64>,
    sorted: OnceLock<Vec<f64>>,
}

impl BootstrapDistribution {
    /// Create a distribution from generated values
    ///
    /// `sample_size` is the size of the original sample, `seed` the base seed
    /// the values were generated from, when known. Fails with
    /// [`Error::InvalidInput`] if `values` is empty or contains a NaN or
    /// infinite value.
    pub fn new(values: Vec<f64>, sample_size: Option<usize>, seed: Option<u64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidInput(
                "Bootstrap distribution requires at least one value".to_string(),
            ));
        }
        check_finite(&values)?;
        Ok(Self {
            values,
            sample_size,
            seed,
            sorted: OnceLock::new(),
        })
    }

    /// Create a distribution from externally produced values
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        Self::new(values, None, None)
    }

    pub(crate) fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of resamples (`R`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the distribution has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in generation order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Values in ascending order
    pub fn sorted(&self) -> &[f64] {
        self.sorted.get_or_init(|| {
            let mut sorted = self.values.clone();
            sorted.sort_unstable_by(f64::total_cmp);
            sorted
        })
    }

    /// Size of the sample the resamples were drawn from, if known
    pub fn sample_size(&self) -> Option<usize> {
        self.sample_size
    }

    /// Base seed used to generate the distribution, if known
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn min(&self) -> f64 {
        self.sorted()[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted()[self.len() - 1]
    }

    /// Mean of the bootstrap values
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.len() as f64
    }

    /// Bootstrap standard error (sample standard deviation, n - 1 denominator)
    ///
    /// Requires at least two values.
    pub fn standard_error(&self) -> Result<f64> {
        let n = self.len();
        if n < 2 {
            return Err(Error::InvalidInput(format!(
                "Standard error requires at least 2 bootstrap values, got {n}"
            )));
        }
        let mean = self.mean();
        let ss = self.values.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        Ok((ss / (n - 1) as f64).sqrt())
    }

    /// Type 7 quantile of the distribution
    pub fn quantile(&self, p: f64) -> Result<f64> {
        Ok(quantile_sorted(self.sorted(), p)?)
    }

    /// Percentile interval centred on the distribution mean
    pub fn percentile_interval(&self, level: f64) -> Result<ConfidenceInterval> {
        let level = ConfidenceLevel::new(level)?;
        PercentileBootstrap.calculate_interval(self, self.mean(), level)
    }

    /// Interval with an explicit method and point estimate
    pub fn interval(
        &self,
        level: f64,
        method: IntervalMethod,
        estimate: f64,
    ) -> Result<ConfidenceInterval> {
        let level = ConfidenceLevel::new(level)?;
        method.calculate_interval(self, estimate, level)
    }

    /// Serializable summary for reporting
    pub fn summary(&self) -> DistributionSummary {
        DistributionSummary {
            repetitions: self.len(),
            sample_size: self.sample_size,
            seed: self.seed,
            mean: self.mean(),
            standard_error: self.standard_error().ok(),
            min: self.min(),
            max: self.max(),
        }
    }
}

/// Reject NaN and infinite bootstrap values
pub(crate) fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|x| !x.is_finite()) {
        Some(pos) => Err(Error::InvalidInput(format!(
            "Bootstrap value {pos} is not finite: {}",
            values[pos]
        ))),
        None => Ok(()),
    }
}

/// Generation order and provenance define equality; the sort cache does not
impl PartialEq for BootstrapDistribution {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
            && self.sample_size == other.sample_size
            && self.seed == other.seed
    }
}

/// Summary statistics of a bootstrap distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub repetitions: usize,
    pub sample_size: Option<usize>,
    pub seed: Option<u64>,
    pub mean: f64,
    pub standard_error: Option<f64>,
    pub min: f64,
    pub max: f64,
}
