//! High-level API for bootstrap confidence intervals
//!
//! Two free functions cover the whole procedure:
//!
//! 1. [`generate`] draws `R` resamples from a sample, evaluates a statistic
//!    on each and returns the [`BootstrapDistribution`].
//! 2. [`confidence_interval`] reads a percentile interval off a distribution.
//!
//! The distribution can be kept and queried at as many confidence levels as
//! needed without resampling again.

use crate::distribution::{check_finite, BootstrapDistribution};
use crate::methods::{percentile_bounds, BootstrapMethod, IntervalMethod};
use crate::types::{ConfidenceInterval, ConfidenceLevel};
use bootstrap_core::{evaluate, seeded_rng, Error, ResampleWorkspace, Result, Sample, Statistic};
use bootstrap_quantile::sorted_copy;
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Default number of bootstrap resamples
pub const DEFAULT_REPETITIONS: usize = 10_000;

/// Below this many resamples the tail quantiles are unstable
pub const MIN_RECOMMENDED_REPETITIONS: usize = 1_000;

/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Generate a bootstrap distribution using a caller-owned random source
///
/// Draws `repetitions` resamples of `sample` (each of the sample's size,
/// uniformly with replacement), applies `statistic` to each and returns
/// the values in generation order. The random source is advanced
/// sequentially, so the same generator state reproduces the same
/// distribution bit for bit.
///
/// # Errors
/// - [`Error::InvalidInput`] if `repetitions` is zero
/// - [`Error::Statistic`] with the resample index if the statistic fails or
///   returns a non-finite value; no partial distribution is returned
///
/// # Example
/// ```rust
/// use bootstrap_confidence::{confidence_interval, generate};
/// use bootstrap_core::{seeded_rng, Mean, Sample};
///
/// let sample = Sample::new(vec![2298.0, 2400.0, 2979.0, 2500.0, 2100.0]).unwrap();
/// let mut rng = seeded_rng(42);
/// let dist = generate(&sample, &Mean, 2000, &mut rng).unwrap();
///
/// let ci = confidence_interval(&dist, 0.95).unwrap();
/// assert!(ci.lower <= ci.upper);
/// ```
#[instrument(skip(sample, statistic, rng), fields(n = sample.len(), statistic = statistic.name()))]
pub fn generate<T, S, R>(
    sample: &Sample<T>,
    statistic: &S,
    repetitions: usize,
    rng: &mut R,
) -> Result<BootstrapDistribution>
where
    T: Clone,
    S: Statistic<T> + ?Sized,
    R: Rng + ?Sized,
{
    generate_from_slice(sample, statistic, repetitions, rng)
}

/// Generate a bootstrap distribution from a seed
///
/// Builds the crate's portable generator from `seed` and delegates to
/// [`generate`]. The seed is recorded on the distribution.
pub fn generate_seeded<T, S>(
    sample: &Sample<T>,
    statistic: &S,
    repetitions: usize,
    seed: u64,
) -> Result<BootstrapDistribution>
where
    T: Clone,
    S: Statistic<T> + ?Sized,
{
    let mut rng = seeded_rng(seed);
    Ok(generate(sample, statistic, repetitions, &mut rng)?.with_seed(seed))
}

/// Generate a bootstrap distribution from raw observations
///
/// Same as [`generate`], but also fails with [`Error::InvalidInput`] when
/// `observations` is empty.
pub fn generate_from_slice<T, S, R>(
    observations: &[T],
    statistic: &S,
    repetitions: usize,
    rng: &mut R,
) -> Result<BootstrapDistribution>
where
    T: Clone,
    S: Statistic<T> + ?Sized,
    R: Rng + ?Sized,
{
    validate_generation(observations.len(), repetitions)?;

    let n = observations.len();
    let mut workspace = ResampleWorkspace::with_capacity(n);
    let mut values = Vec::with_capacity(repetitions);

    for i in 0..repetitions {
        let resample = workspace.resample(observations, rng);
        let value = evaluate(statistic, resample).map_err(|e| e.at_resample(i))?;
        values.push(value);
    }

    debug!("Generated {} bootstrap values from {} observations", repetitions, n);
    BootstrapDistribution::new(values, Some(n), None)
}

pub(crate) fn validate_generation(sample_size: usize, repetitions: usize) -> Result<()> {
    if sample_size == 0 {
        return Err(Error::empty_input("Bootstrap generation"));
    }
    if repetitions == 0 {
        return Err(Error::InvalidInput(
            "Number of repetitions must be positive".to_string(),
        ));
    }
    if repetitions < MIN_RECOMMENDED_REPETITIONS {
        warn!(
            repetitions,
            recommended = MIN_RECOMMENDED_REPETITIONS,
            "Few bootstrap repetitions; tail quantiles may be unstable"
        );
    }
    Ok(())
}

/// Percentile confidence interval of a bootstrap distribution
///
/// Bounds are the type 7 quantiles at `alpha/2` and `1 - alpha/2` with
/// `alpha = 1 - level`. The interval's estimate is the distribution mean;
/// use [`confidence_interval_with`] to centre it on the original-sample
/// statistic instead.
///
/// # Errors
/// [`Error::InvalidInput`] if `level` is not in (0, 1).
pub fn confidence_interval(
    distribution: &BootstrapDistribution,
    level: f64,
) -> Result<ConfidenceInterval> {
    distribution.percentile_interval(level)
}

/// Confidence interval with an explicit method and point estimate
pub fn confidence_interval_with<M: BootstrapMethod>(
    distribution: &BootstrapDistribution,
    level: f64,
    method: &M,
    estimate: f64,
) -> Result<ConfidenceInterval> {
    let level = ConfidenceLevel::new(level)?;
    method.calculate_interval(distribution, estimate, level)
}

/// Percentile confidence interval of raw bootstrap values
///
/// Sorts an internal copy of `values`. Fails with [`Error::InvalidInput`]
/// on empty input, NaN or infinite values, or a level outside (0, 1).
pub fn percentile_interval(values: &[f64], level: f64) -> Result<ConfidenceInterval> {
    let level = ConfidenceLevel::new(level)?;
    if values.is_empty() {
        return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
    }
    check_finite(values)?;
    let sorted = sorted_copy(values)?;
    let (lower, upper) = percentile_bounds(&sorted, level)?;
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Ok(ConfidenceInterval::new(
        lower,
        upper,
        mean,
        level.value(),
        IntervalMethod::Percentile,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrap_core::{Mean, Proportion};

    #[test]
    fn test_zero_repetitions_rejected() {
        let sample = Sample::new(vec![1.0, 2.0]).unwrap();
        let err = generate_seeded(&sample, &Mean, 0, 1).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_empty_slice_rejected() {
        let err = generate_from_slice(&[] as &[f64], &Mean, 10, &mut seeded_rng(1)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_generate_length_and_seed() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        let dist = generate_seeded(&sample, &Mean, 37, 5).unwrap();
        assert_eq!(dist.len(), 37);
        assert_eq!(dist.sample_size(), Some(3));
        assert_eq!(dist.seed(), Some(5));
    }

    #[test]
    fn test_statistic_failure_reports_index() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let flaky = |xs: &[f64]| -> Result<f64> {
            let call = calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if call == 4 {
                Err(Error::statistic("boom"))
            } else {
                Ok(xs[0])
            }
        };
        match generate_seeded(&sample, &flaky, 10, 9).unwrap_err() {
            Error::Statistic { resample, message } => {
                assert_eq!(resample, Some(4));
                assert_eq!(message, "boom");
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_categorical_generation() {
        let sample = Sample::new(vec!["yes", "no", "no", "yes", "no"]).unwrap();
        let dist = generate_seeded(&sample, &Proportion::of("yes"), 200, 3).unwrap();
        assert!(dist.values().iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_percentile_interval_on_slice() {
        let values: Vec<f64> = (0..=100).rev().map(f64::from).collect();
        let ci = percentile_interval(&values, 0.9).unwrap();
        assert!((ci.lower - 5.0).abs() < 1e-9);
        assert!((ci.upper - 95.0).abs() < 1e-9);
        assert!(percentile_interval(&[], 0.9).unwrap_err().is_invalid_input());
        assert!(percentile_interval(&values, 1.0).unwrap_err().is_invalid_input());
        assert!(percentile_interval(&[1.0, f64::NAN], 0.9).is_err());
    }

    #[test]
    fn test_infinite_values_rejected_not_panicking() {
        let values = [f64::NEG_INFINITY, 1.0, 2.0, f64::INFINITY];
        assert!(percentile_interval(&values, 0.95)
            .unwrap_err()
            .is_invalid_input());
        assert!(BootstrapDistribution::from_values(values.to_vec())
            .unwrap_err()
            .is_invalid_input());
    }
}
