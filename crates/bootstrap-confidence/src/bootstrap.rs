//! Bootstrap engine with pluggable execution
//!
//! [`Bootstrap`] runs the same procedure as [`generate`](crate::generate),
//! but distributes resamples over an [`ExecutionEngine`]. Resample `i`
//! always draws from the stream derived from `(seed, i)`, so the
//! distribution depends only on the configuration and never on the engine
//! or the thread count.

use crate::api::validate_generation;
use crate::config::BootstrapConfig;
use crate::distribution::BootstrapDistribution;
use crate::methods::{BootstrapMethod, IntervalMethod};
use crate::types::ConfidenceInterval;
use bootstrap_core::{
    evaluate, stream_rng, ExecutionEngine, ResampleWorkspace, Result, Sample, Statistic,
};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Result of a complete bootstrap run
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// Statistic values, one per resample in index order
    pub distribution: BootstrapDistribution,
    /// Statistic evaluated on the original sample
    pub estimate: f64,
    /// Interval at the configured level and method
    pub interval: ConfidenceInterval,
    /// Wall-clock time spent resampling and evaluating
    pub elapsed: Duration,
}

/// Bootstrap engine
///
/// ```rust
/// use bootstrap_confidence::Bootstrap;
/// use bootstrap_core::{sequential, Mean, Sample};
///
/// let sample = Sample::new(vec![2298.0, 2400.0, 2979.0, 2500.0, 2100.0]).unwrap();
/// let result = Bootstrap::new(sequential())
///     .with_repetitions(2000)
///     .with_seed(7)
///     .run(&sample, &Mean)
///     .unwrap();
///
/// assert_eq!(result.distribution.len(), 2000);
/// assert!(result.interval.lower <= result.interval.upper);
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrap<E> {
    engine: E,
    config: BootstrapConfig,
}

impl<E: ExecutionEngine> Bootstrap<E> {
    /// Create an engine with the default configuration
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            config: BootstrapConfig::default(),
        }
    }

    /// Create an engine from a validated configuration
    pub fn with_config(engine: E, config: BootstrapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { engine, config })
    }

    /// Set the number of resamples
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.config.repetitions = repetitions;
        self
    }

    /// Set the confidence level used by [`run`](Self::run)
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.config.confidence_level = confidence_level;
        self
    }

    /// Set the base seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the interval method used by [`run`](Self::run)
    pub fn with_method(mut self, method: IntervalMethod) -> Self {
        self.config.method = method;
        self
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Generate the bootstrap distribution of `statistic` over `sample`
    ///
    /// # Errors
    /// - [`Error::InvalidInput`](bootstrap_core::Error::InvalidInput) if the
    ///   repetition count is zero
    /// - [`Error::Statistic`](bootstrap_core::Error::Statistic) for the
    ///   lowest failing resample index
    #[instrument(skip(self, sample, statistic), fields(
        n = sample.len(),
        repetitions = self.config.repetitions,
        strategy = ?self.engine.strategy(),
    ))]
    pub fn distribution<T, S>(&self, sample: &Sample<T>, statistic: &S) -> Result<BootstrapDistribution>
    where
        T: Clone + Send + Sync,
        S: Statistic<T> + ?Sized,
    {
        let repetitions = self.config.repetitions;
        let seed = self.config.seed;
        validate_generation(sample.len(), repetitions)?;

        let observations = sample.as_slice();
        let n = observations.len();

        let values = self
            .engine
            .execute_batch_with(
                repetitions,
                || ResampleWorkspace::<T>::with_capacity(n),
                |workspace, i| {
                    let mut rng = stream_rng(seed, i as u64);
                    let resample = workspace.resample(observations, &mut rng);
                    evaluate(statistic, resample).map_err(|e| e.at_resample(i))
                },
            )
            .into_iter()
            .collect::<Result<Vec<f64>>>()?;

        debug!(
            "Generated {} bootstrap values on {} thread(s)",
            values.len(),
            self.engine.num_threads()
        );
        BootstrapDistribution::new(values, Some(n), Some(seed))
    }

    /// Generate the distribution and extract the configured interval
    ///
    /// The interval is centred on the statistic evaluated on the original
    /// sample.
    pub fn run<T, S>(&self, sample: &Sample<T>, statistic: &S) -> Result<BootstrapResult>
    where
        T: Clone + Send + Sync,
        S: Statistic<T> + ?Sized,
    {
        self.config.validate()?;
        let start = Instant::now();

        let estimate = evaluate(statistic, sample.as_slice())?;
        let distribution = self.distribution(sample, statistic)?;
        let elapsed = start.elapsed();

        let interval =
            self.config
                .method
                .calculate_interval(&distribution, estimate, self.config.level()?)?;

        debug!(
            "Bootstrap completed in {:?} using {}: {}",
            elapsed,
            self.config.method.name(),
            interval
        );

        Ok(BootstrapResult {
            distribution,
            estimate,
            interval,
            elapsed,
        })
    }

    /// Percentile interval of an existing distribution at the configured level
    pub fn confidence_interval(&self, distribution: &BootstrapDistribution) -> Result<ConfidenceInterval> {
        distribution.percentile_interval(self.config.confidence_level)
    }
}
