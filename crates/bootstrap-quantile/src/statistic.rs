//! Order-statistic based bootstrap statistics
//!
//! Adapters that expose the type 7 quantile estimator through the
//! [`Statistic`] trait so it can be bootstrapped like any other statistic.

use crate::linear::{sorted_copy, LinearInterpolation, QuantileEstimator};
use bootstrap_core::{Error, Result, Statistic};
use num_traits::ToPrimitive;

fn to_sorted_f64<T: ToPrimitive>(observations: &[T]) -> Result<Vec<f64>> {
    let values = observations
        .iter()
        .map(|x| {
            x.to_f64()
                .ok_or_else(|| Error::statistic("observation not representable as f64"))
        })
        .collect::<Result<Vec<f64>>>()?;
    sorted_copy(&values).map_err(|e| Error::statistic(e.to_string()))
}

/// Sample median (type 7 quantile at 0.5)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Median;

impl<T: ToPrimitive + Sync> Statistic<T> for Median {
    fn compute(&self, observations: &[T]) -> Result<f64> {
        let sorted = to_sorted_f64(observations)?;
        LinearInterpolation
            .quantile_sorted(&sorted, 0.5)
            .map_err(|e| Error::statistic(e.to_string()))
    }

    fn name(&self) -> &str {
        "median"
    }
}

/// Sample quantile at a fixed probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantile {
    probability: f64,
}

impl Quantile {
    /// Create a quantile statistic; `probability` must be in [0, 1]
    pub fn new(probability: f64) -> Result<Self> {
        crate::Error::check_probability(probability)?;
        Ok(Self { probability })
    }

    /// The probability this statistic estimates
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<T: ToPrimitive + Sync> Statistic<T> for Quantile {
    fn compute(&self, observations: &[T]) -> Result<f64> {
        let sorted = to_sorted_f64(observations)?;
        LinearInterpolation
            .quantile_sorted(&sorted, self.probability)
            .map_err(|e| Error::statistic(e.to_string()))
    }

    fn name(&self) -> &str {
        "quantile"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(Median.compute(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_relative_eq!(Median.compute(&[4_i32, 1, 3, 2]).unwrap(), 2.5);
    }

    #[test]
    fn test_median_errors_are_statistic_errors() {
        assert!(Median.compute(&[] as &[f64]).unwrap_err().is_statistic());
        assert!(Median.compute(&[1.0, f64::NAN]).unwrap_err().is_statistic());
    }

    #[test]
    fn test_quantile_statistic() {
        let q = Quantile::new(0.25).unwrap();
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_relative_eq!(q.compute(&data).unwrap(), 3.25);
        assert_eq!(q.probability(), 0.25);
        assert!(Quantile::new(1.5).unwrap_err().is_invalid_input());
    }
}
