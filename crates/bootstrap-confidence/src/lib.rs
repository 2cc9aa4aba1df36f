//! Bootstrap confidence intervals
//!
//! This crate estimates the sampling variability of a statistic by
//! resampling with replacement and reads confidence intervals off the
//! resulting distribution:
//!
//! - **Free functions**: [`generate`] and [`confidence_interval`] for the
//!   plain two-step procedure with a caller-owned random source
//! - **[`Bootstrap`]**: a configurable engine that runs resamples on a
//!   sequential or Rayon-parallel [`ExecutionEngine`](bootstrap_core::ExecutionEngine)
//!   with results independent of the thread count
//! - **Interval methods**: [`PercentileBootstrap`] (type 7 quantiles) and
//!   [`StandardErrorBootstrap`]
//!
//! # Examples
//!
//! ```rust
//! use bootstrap_confidence::{confidence_interval, generate_seeded};
//! use bootstrap_core::{Proportion, Sample};
//!
//! // 1 = returned the survey, 0 = did not
//! let outcomes: Vec<u8> = (0..40).map(|i| u8::from(i % 3 == 0)).collect();
//! let sample = Sample::new(outcomes).unwrap();
//!
//! let dist = generate_seeded(&sample, &Proportion::of(1u8), 2000, 42).unwrap();
//! let ci = confidence_interval(&dist, 0.95).unwrap();
//! assert!(0.0 <= ci.lower && ci.upper <= 1.0);
//! ```

pub mod api;
mod bootstrap;
pub mod config;
mod distribution;
mod methods;
mod types;

// Re-exports
pub use api::{
    confidence_interval, confidence_interval_with, generate, generate_from_slice,
    generate_seeded, percentile_interval, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_REPETITIONS,
    MIN_RECOMMENDED_REPETITIONS,
};
pub use bootstrap::{Bootstrap, BootstrapResult};
pub use config::{BootstrapConfig, DEFAULT_SEED};
pub use distribution::{BootstrapDistribution, DistributionSummary};
pub use methods::{
    percentile_bounds, BootstrapMethod, IntervalMethod, PercentileBootstrap,
    StandardErrorBootstrap,
};
pub use types::{ConfidenceInterval, ConfidenceLevel};
