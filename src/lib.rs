//! Nonparametric bootstrap confidence intervals
//!
//! Facade over the workspace crates:
//!
//! - [`bootstrap_core`]: samples, statistics, resampling and execution engines
//! - [`bootstrap_quantile`]: type 7 sample quantiles and the median/quantile
//!   statistics
//! - [`bootstrap_confidence`]: bootstrap distributions and interval extraction
//!
//! ```rust
//! use bootstrap_stats::prelude::*;
//!
//! let sample = Sample::new(vec![2298.0, 2400.0, 2979.0, 2500.0, 2100.0, 2650.0]).unwrap();
//! let dist = generate_seeded(&sample, &Median, 2000, 42).unwrap();
//! let ci = confidence_interval(&dist, 0.95).unwrap();
//! assert!(ci.lower <= ci.upper);
//! ```

pub use bootstrap_confidence;
pub use bootstrap_core;
pub use bootstrap_quantile;

pub use bootstrap_confidence::{
    confidence_interval, generate, generate_seeded, Bootstrap, BootstrapConfig,
    BootstrapDistribution, BootstrapResult, ConfidenceInterval, ConfidenceLevel, IntervalMethod,
};
pub use bootstrap_core::{Error, Mean, Proportion, Result, Sample, Statistic};
pub use bootstrap_quantile::{Median, Quantile};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use bootstrap_confidence::{
        confidence_interval, generate, generate_seeded, Bootstrap, BootstrapConfig,
        BootstrapDistribution, ConfidenceInterval, IntervalMethod,
    };
    pub use bootstrap_core::{seeded_rng, sequential, Error, Mean, Proportion, Result, Sample, Statistic};
    pub use bootstrap_quantile::{Median, Quantile};

    #[cfg(feature = "parallel")]
    pub use bootstrap_core::{parallel, ParallelEngine};
}
