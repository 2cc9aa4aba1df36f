//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Sample sizes that cover the degenerate and small cases
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        1,   // Single observation
        2,   // Smallest non-trivial
        3,
        20,  // Course example size
        100, // Round number
        261, // Course proportion example size
    ]
}

/// Deterministic test data with distinct values
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.1).collect()
}
