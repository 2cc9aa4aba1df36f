//! Linear interpolation between order statistics (Hyndman-Fan type 7)
//!
//! For sorted data `x[0..n]` and probability `p`, the rank is
//! `h = (n - 1) * p` and the quantile is
//! `x[floor(h)] + (h - floor(h)) * (x[ceil(h)] - x[floor(h)])`.
//! This is the default estimator of R and NumPy.

use crate::{Error, Result};

/// Trait for quantile estimators over real-valued data
pub trait QuantileEstimator: Send + Sync {
    /// Quantile of already sorted (ascending) data
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64>;

    /// Quantile of unsorted data
    ///
    /// Sorts an internal copy; `data` is left untouched.
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        let sorted = sorted_copy(data)?;
        self.quantile_sorted(&sorted, p)
    }

    /// Several quantiles of already sorted data
    fn quantiles_sorted(&self, sorted: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter().map(|&p| self.quantile_sorted(sorted, p)).collect()
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &str;
}

/// Type 7 quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl QuantileEstimator for LinearInterpolation {
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        let n = sorted.len();
        if n == 0 {
            return Err(Error::EmptyData);
        }
        if n == 1 {
            return Ok(sorted[0]);
        }

        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        let hi = (h.ceil() as usize).min(n - 1);
        let frac = h - h.floor();

        let lower = sorted[lo];
        if frac == 0.0 || lo == hi {
            return Ok(lower);
        }
        Ok(lower + frac * (sorted[hi] - lower))
    }

    fn name(&self) -> &str {
        "type-7 linear interpolation"
    }
}

/// Sorted copy of `data`
///
/// Fails with [`Error::NotANumber`] if any value is NaN; infinities sort to
/// the ends.
pub fn sorted_copy(data: &[f64]) -> Result<Vec<f64>> {
    if data.iter().any(|x| x.is_nan()) {
        return Err(Error::NotANumber);
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Ok(sorted)
}

/// Type 7 quantile of sorted data
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    LinearInterpolation.quantile_sorted(sorted, p)
}

/// Type 7 quantile of unsorted data
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    LinearInterpolation.quantile(data, p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_values() {
        // R: quantile(1:10, c(0, 0.25, 0.5, 0.9, 1), type = 7)
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_relative_eq!(quantile_sorted(&data, 0.0).unwrap(), 1.0);
        assert_relative_eq!(quantile_sorted(&data, 0.25).unwrap(), 3.25);
        assert_relative_eq!(quantile_sorted(&data, 0.5).unwrap(), 5.5);
        assert_relative_eq!(quantile_sorted(&data, 0.9).unwrap(), 9.1, epsilon = 1e-12);
        assert_relative_eq!(quantile_sorted(&data, 1.0).unwrap(), 10.0);
    }

    #[test]
    fn test_unsorted_input_not_mutated() {
        let data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        let median = quantile(&data, 0.5).unwrap();
        assert_eq!(median, 3.0);
        assert_eq!(data, vec![5.0, 1.0, 4.0, 2.0, 3.0]);
    }

    #[test]
    fn test_interpolates_between_neighbours() {
        let sorted = [10.0, 20.0];
        assert_relative_eq!(quantile_sorted(&sorted, 0.025).unwrap(), 10.25, epsilon = 1e-12);
        assert_relative_eq!(quantile_sorted(&sorted, 0.975).unwrap(), 19.75, epsilon = 1e-12);
    }

    #[test]
    fn test_single_and_constant() {
        assert_eq!(quantile_sorted(&[7.0], 0.3).unwrap(), 7.0);
        let constant = [2.5; 9];
        for p in [0.0, 0.025, 0.5, 0.975, 1.0] {
            assert_eq!(quantile_sorted(&constant, p).unwrap(), 2.5);
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(quantile_sorted(&[], 0.5), Err(Error::EmptyData));
        assert_eq!(
            quantile_sorted(&[1.0], -0.1),
            Err(Error::InvalidProbability { p: -0.1 })
        );
        assert_eq!(quantile(&[1.0, f64::NAN], 0.5), Err(Error::NotANumber));
    }

    #[test]
    fn test_quantiles_sorted() {
        let data: Vec<f64> = (0..=100).map(f64::from).collect();
        let qs = LinearInterpolation
            .quantiles_sorted(&data, &[0.025, 0.5, 0.975])
            .unwrap();
        assert_relative_eq!(qs[0], 2.5, epsilon = 1e-12);
        assert_relative_eq!(qs[1], 50.0, epsilon = 1e-12);
        assert_relative_eq!(qs[2], 97.5, epsilon = 1e-12);
    }
}
