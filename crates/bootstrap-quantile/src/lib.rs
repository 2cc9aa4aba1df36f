//! Quantile estimation for bootstrap distributions
//!
//! This crate provides the linear-interpolation quantile estimator (type 7
//! in the Hyndman-Fan taxonomy) used to read percentile confidence
//! intervals off a bootstrap distribution, plus statistic adapters
//! ([`Median`], [`Quantile`]) for bootstrapping order statistics.
//!
//! # Example
//!
//! ```rust
//! use bootstrap_quantile::{quantile_sorted, sorted_copy};
//!
//! let sorted = sorted_copy(&[4.0, 1.0, 3.0, 2.0]).unwrap();
//! assert_eq!(quantile_sorted(&sorted, 0.5).unwrap(), 2.5);
//! ```

pub mod error;
pub mod linear;
pub mod statistic;

// Re-export main types
pub use error::{Error, Result};
pub use linear::{quantile, quantile_sorted, sorted_copy, LinearInterpolation, QuantileEstimator};
pub use statistic::{Median, Quantile};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{LinearInterpolation, Median, Quantile, QuantileEstimator};
}
