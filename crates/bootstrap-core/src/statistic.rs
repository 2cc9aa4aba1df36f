//! Statistic functions evaluated on samples and resamples
//!
//! A statistic maps a slice of observations to a single real number. The
//! bootstrap engine calls it once on the original sample and once per
//! resample, so implementations must be pure: the same observations always
//! give the same value.
//!
//! Built-in statistics:
//! - [`Mean`]: arithmetic mean of numeric observations
//! - [`Proportion`]: share of observations equal to an explicit success category
//!
//! Order-statistic based estimators (median, arbitrary quantiles) live in
//! `bootstrap-quantile`. Any closure `Fn(&[T]) -> Result<f64>` is also a
//! statistic.

use crate::{Error, Result};
use num_traits::ToPrimitive;

/// A pure function from observations to a real number
pub trait Statistic<T>: Send + Sync {
    /// Evaluate the statistic
    ///
    /// `observations` is either the original sample or a resample of the same
    /// size. Failures should be reported as [`Error::Statistic`]; the engine
    /// attaches the resample index.
    fn compute(&self, observations: &[T]) -> Result<f64>;

    /// Human-readable name of the statistic
    fn name(&self) -> &str {
        "custom"
    }
}

impl<T, F> Statistic<T> for F
where
    F: Fn(&[T]) -> Result<f64> + Send + Sync,
{
    fn compute(&self, observations: &[T]) -> Result<f64> {
        self(observations)
    }
}

/// Arithmetic mean
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean;

impl<T: ToPrimitive + Sync> Statistic<T> for Mean {
    fn compute(&self, observations: &[T]) -> Result<f64> {
        if observations.is_empty() {
            return Err(Error::statistic("mean of empty observations"));
        }
        let mut sum = 0.0;
        for value in observations {
            sum += value
                .to_f64()
                .ok_or_else(|| Error::statistic("observation not representable as f64"))?;
        }
        Ok(sum / observations.len() as f64)
    }

    fn name(&self) -> &str {
        "mean"
    }
}

/// Proportion of observations equal to a designated success category
///
/// The success category is always explicit: a proportion of "died = yes"
/// and one of "lived = no" are the same number, but the engine never guesses
/// which label the caller means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proportion<T> {
    success: T,
}

impl<T> Proportion<T> {
    /// Create a proportion statistic for the given success category
    pub fn of(success: T) -> Self {
        Self { success }
    }

    /// The category counted as a success
    pub fn success(&self) -> &T {
        &self.success
    }
}

impl<T: PartialEq + Send + Sync> Statistic<T> for Proportion<T> {
    fn compute(&self, observations: &[T]) -> Result<f64> {
        if observations.is_empty() {
            return Err(Error::statistic("proportion of empty observations"));
        }
        let hits = observations.iter().filter(|x| **x == self.success).count();
        Ok(hits as f64 / observations.len() as f64)
    }

    fn name(&self) -> &str {
        "proportion"
    }
}

/// Evaluate a statistic and check that the result is a finite number
///
/// NaN and infinite values are reported as [`Error::Statistic`].
pub fn evaluate<T, S>(statistic: &S, observations: &[T]) -> Result<f64>
where
    S: Statistic<T> + ?Sized,
{
    let value = statistic.compute(observations)?;
    if !value.is_finite() {
        return Err(Error::statistic(format!(
            "{} produced non-finite value {value}",
            statistic.name()
        )));
    }
    Ok(value)
}
