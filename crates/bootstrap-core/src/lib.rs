//! Core traits and types for bootstrap resampling
//!
//! This crate provides the foundation shared by the bootstrap-stats crates:
//!
//! - [`Sample`]: an immutable, non-empty set of observations
//! - [`Statistic`]: the pure function evaluated on every resample, with the
//!   built-in [`Mean`] and [`Proportion`]
//! - [`resample`]: uniform with-replacement draws and seeded random streams
//! - [`execution`]: sequential and Rayon-parallel execution engines
//! - [`Error`]: the unified error type
//!
//! # Example
//!
//! ```rust
//! use bootstrap_core::{resample::{seeded_rng, ResampleWorkspace}, Mean, Sample, Statistic};
//!
//! let sample = Sample::new(vec![2298.0, 2400.0, 2979.0, 2500.0]).unwrap();
//! let mut rng = seeded_rng(42);
//! let mut workspace = ResampleWorkspace::with_capacity(sample.len());
//!
//! let resample = workspace.resample(&sample, &mut rng);
//! assert_eq!(resample.len(), sample.len());
//! let mean = Mean.compute(resample).unwrap();
//! assert!((2298.0..=2979.0).contains(&mean));
//! ```

pub mod error;
pub mod execution;
pub mod resample;
pub mod sample;
pub mod statistic;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use resample::{
    derive_stream_seed, draw_indices, resample_into, seeded_rng, stream_rng, BootstrapRng,
    ResampleWorkspace,
};
pub use sample::Sample;
pub use statistic::{evaluate, Mean, Proportion, Statistic};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, ExecutionEngine, Mean, Proportion, Result, Sample, SequentialEngine, Statistic,
    };

    #[cfg(feature = "parallel")]
    pub use crate::ParallelEngine;
}
