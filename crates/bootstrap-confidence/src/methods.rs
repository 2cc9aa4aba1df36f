//! Bootstrap method implementations
//!
//! This module provides the methods for constructing confidence intervals
//! from a bootstrap distribution.

use crate::distribution::BootstrapDistribution;
use crate::types::{ConfidenceInterval, ConfidenceLevel};
use bootstrap_core::{Error, Result};
use bootstrap_quantile::quantile_sorted;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

/// Bootstrap method for calculating confidence intervals
///
/// This trait defines how to construct a confidence interval from
/// a bootstrap distribution.
pub trait BootstrapMethod: Clone + Send + Sync {
    /// Calculate confidence interval from the bootstrap distribution
    ///
    /// `estimate` is the point estimate reported with the interval, usually
    /// the statistic evaluated on the original sample.
    fn calculate_interval(
        &self,
        distribution: &BootstrapDistribution,
        estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}

/// Percentile bootstrap method
///
/// Uses the empirical alpha/2 and 1 - alpha/2 quantiles of the bootstrap
/// distribution (type 7 interpolation) as the bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl BootstrapMethod for PercentileBootstrap {
    fn calculate_interval(
        &self,
        distribution: &BootstrapDistribution,
        estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let (lower, upper) = percentile_bounds(distribution.sorted(), level)?;
        Ok(ConfidenceInterval::new(
            lower,
            upper,
            estimate,
            level.value(),
            IntervalMethod::Percentile,
        ))
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

/// Standard error bootstrap method
///
/// `estimate ± z * se`, where `se` is the standard deviation of the bootstrap
/// distribution and `z` the standard normal quantile at 1 - alpha/2.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardErrorBootstrap;

impl BootstrapMethod for StandardErrorBootstrap {
    fn calculate_interval(
        &self,
        distribution: &BootstrapDistribution,
        estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let se = distribution.standard_error()?;
        let z = normal_quantile(1.0 - level.tail_probability())?;
        debug!("Standard error interval: se={:.6}, z={:.4}", se, z);

        Ok(ConfidenceInterval::new(
            estimate - z * se,
            estimate + z * se,
            estimate,
            level.value(),
            IntervalMethod::StandardError,
        ))
    }

    fn name(&self) -> &'static str {
        "Standard Error Bootstrap"
    }
}

/// Serializable selector over the available bootstrap methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalMethod {
    #[default]
    Percentile,
    StandardError,
}

impl BootstrapMethod for IntervalMethod {
    fn calculate_interval(
        &self,
        distribution: &BootstrapDistribution,
        estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        match self {
            Self::Percentile => PercentileBootstrap.calculate_interval(distribution, estimate, level),
            Self::StandardError => {
                StandardErrorBootstrap.calculate_interval(distribution, estimate, level)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Percentile => PercentileBootstrap.name(),
            Self::StandardError => StandardErrorBootstrap.name(),
        }
    }
}

/// Lower and upper percentile bounds of sorted values
///
/// Fails with [`Error::InvalidInput`] on empty input.
pub fn percentile_bounds(sorted: &[f64], level: ConfidenceLevel) -> Result<(f64, f64)> {
    if sorted.is_empty() {
        return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
    }
    let (p_lower, p_upper) = level.bound_probabilities();
    let lower = quantile_sorted(sorted, p_lower)?;
    let upper = quantile_sorted(sorted, p_upper)?;
    debug!(
        "Percentile bounds at p=({:.4}, {:.4}): [{}, {}]",
        p_lower, p_upper, lower, upper
    );
    Ok((lower, upper))
}

fn normal_quantile(p: f64) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::InvalidInput(format!("Standard normal unavailable: {e}")))?;
    Ok(normal.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn level(value: f64) -> ConfidenceLevel {
        ConfidenceLevel::new(value).unwrap()
    }

    #[test]
    fn test_percentile_bounds_interpolate() {
        let sorted: Vec<f64> = (0..=100).map(f64::from).collect();
        let (lo, hi) = percentile_bounds(&sorted, level(0.95)).unwrap();
        assert_relative_eq!(lo, 2.5, epsilon = 1e-9);
        assert_relative_eq!(hi, 97.5, epsilon = 1e-9);
    }

    #[test]
    fn test_percentile_bounds_empty() {
        assert!(percentile_bounds(&[], level(0.95))
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_percentile_method_tags_interval() {
        let dist = BootstrapDistribution::from_values((1..=9).map(f64::from).collect()).unwrap();
        let ci = PercentileBootstrap
            .calculate_interval(&dist, 5.0, level(0.5))
            .unwrap();
        // h = 8 * 0.25 = 2 and 8 * 0.75 = 6
        assert_eq!(ci.lower, 3.0);
        assert_eq!(ci.upper, 7.0);
        assert_eq!(ci.estimate, 5.0);
        assert_eq!(ci.confidence_level, 0.5);
        assert_eq!(ci.method, IntervalMethod::Percentile);
    }

    #[test]
    fn test_standard_error_method() {
        let dist = BootstrapDistribution::from_values(vec![9.0, 10.0, 11.0]).unwrap();
        // se = 1
        let ci = StandardErrorBootstrap
            .calculate_interval(&dist, 10.0, level(0.95))
            .unwrap();
        assert_relative_eq!(ci.lower, 10.0 - 1.959964, epsilon = 1e-5);
        assert_relative_eq!(ci.upper, 10.0 + 1.959964, epsilon = 1e-5);
        assert_eq!(ci.method, IntervalMethod::StandardError);
    }

    #[test]
    fn test_standard_error_needs_two_values() {
        let dist = BootstrapDistribution::from_values(vec![1.0]).unwrap();
        assert!(StandardErrorBootstrap
            .calculate_interval(&dist, 1.0, level(0.95))
            .is_err());
    }

    #[test]
    fn test_interval_method_dispatch_and_serde() {
        let dist = BootstrapDistribution::from_values(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let a = IntervalMethod::Percentile
            .calculate_interval(&dist, 2.5, level(0.9))
            .unwrap();
        let b = PercentileBootstrap
            .calculate_interval(&dist, 2.5, level(0.9))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(IntervalMethod::StandardError.name(), "Standard Error Bootstrap");

        assert_eq!(
            serde_json::to_string(&IntervalMethod::StandardError).unwrap(),
            "\"standard_error\""
        );
        let parsed: IntervalMethod = serde_json::from_str("\"percentile\"").unwrap();
        assert_eq!(parsed, IntervalMethod::Percentile);
    }
}
