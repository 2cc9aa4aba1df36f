//! Shared fixtures for integration tests

#![allow(dead_code)]

use bootstrap_core::Sample;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Bernoulli, Distribution, Normal};

pub use approx::assert_relative_eq;

/// Monthly rents of 20 one-bedroom listings
pub const RENTS: [f64; 20] = [
    2298.0, 2400.0, 2979.0, 2500.0, 2175.0, 2695.0, 2350.0, 2825.0, 2100.0, 2450.0,
    3100.0, 2250.0, 2650.0, 2395.0, 2575.0, 2900.0, 2200.0, 2475.0, 2725.0, 2325.0,
];

pub fn rents() -> Sample<f64> {
    Sample::new(RENTS.to_vec()).unwrap()
}

pub fn rents_min_max() -> (f64, f64) {
    RENTS
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
}

/// 261 survey outcomes, 1 = yes, with exactly `successes` ones
pub fn survey_outcomes(successes: usize) -> Sample<u8> {
    assert!(successes <= 261);
    let outcomes = (0..261).map(|i| u8::from(i < successes)).collect();
    Sample::new(outcomes).unwrap()
}

/// Binary sample of size `n` drawn from Bernoulli(`p`)
pub fn bernoulli_sample(n: usize, p: f64, seed: u64) -> Sample<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Bernoulli::new(p).unwrap();
    Sample::new((0..n).map(|_| u8::from(dist.sample(&mut rng))).collect()).unwrap()
}

/// Normal sample of size `n`
pub fn normal_sample(n: usize, mean: f64, std: f64, seed: u64) -> Sample<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(mean, std).unwrap();
    Sample::new((0..n).map(|_| dist.sample(&mut rng)).collect()).unwrap()
}
