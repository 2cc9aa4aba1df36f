//! Resampling primitives
//!
//! This module provides the building blocks for drawing bootstrap resamples:
//! - Index generation (uniform, with replacement)
//! - Buffer-reusing resampling of arbitrary observation types
//! - Deterministic per-resample random streams for parallel execution

use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random generator used for all seeded bootstrap streams
///
/// ChaCha8 gives a portable stream: the same seed yields the same draws on
/// every platform and `rand` patch release.
pub type BootstrapRng = ChaCha8Rng;

/// Create the random generator for a base seed
pub fn seeded_rng(seed: u64) -> BootstrapRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Derive the seed of an independent stream from a base seed
///
/// SplitMix64 over `base_seed` and `stream`. Neighbouring streams get
/// well-separated seeds, unlike `base_seed + stream`.
#[inline]
pub fn derive_stream_seed(base_seed: u64, stream: u64) -> u64 {
    let mut z = base_seed.wrapping_add(stream.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Random generator for stream `stream` of `base_seed`
pub fn stream_rng(base_seed: u64, stream: u64) -> BootstrapRng {
    seeded_rng(derive_stream_seed(base_seed, stream))
}

/// Fill `out` with `n` indices drawn uniformly from `0..n`, with replacement
///
/// `out` is cleared first. Does nothing for `n == 0`.
pub fn draw_indices<R: Rng + ?Sized>(rng: &mut R, n: usize, out: &mut Vec<usize>) {
    out.clear();
    if n == 0 {
        return;
    }
    let dist = Uniform::new(0, n);
    out.extend((0..n).map(|_| dist.sample(rng)));
}

/// Draw a resample of `source` into `dest`
///
/// `dest` ends up with exactly `source.len()` elements, each a copy of an
/// element of `source` chosen uniformly at random with replacement.
pub fn resample_into<T: Clone, R: Rng + ?Sized>(source: &[T], rng: &mut R, dest: &mut Vec<T>) {
    dest.clear();
    if source.is_empty() {
        return;
    }
    let dist = Uniform::new(0, source.len());
    dest.extend((0..source.len()).map(|_| source[dist.sample(rng)].clone()));
}

/// Reusable buffer for drawing resamples
///
/// One workspace per worker avoids an allocation per resample.
#[derive(Debug, Clone)]
pub struct ResampleWorkspace<T> {
    buffer: Vec<T>,
}

impl<T: Clone> ResampleWorkspace<T> {
    /// Create a workspace sized for samples of `capacity` observations
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Draw a resample of `source` and return a view of it
    ///
    /// The returned slice is valid until the next call.
    pub fn resample<R: Rng + ?Sized>(&mut self, source: &[T], rng: &mut R) -> &[T] {
        resample_into(source, rng, &mut self.buffer);
        &self.buffer
    }
}

impl<T: Clone> Default for ResampleWorkspace<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
