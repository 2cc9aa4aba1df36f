//! Bootstrap intervals for the two course examples
//!
//! Run with `RUST_LOG=bootstrap_confidence=debug` to see the engine's
//! tracing output.

use anyhow::Context;
use bootstrap_confidence::{
    confidence_interval, generate_seeded, Bootstrap, BootstrapConfig, IntervalMethod,
};
use bootstrap_core::{sequential, Mean, Proportion, Sample};
use tracing_subscriber::EnvFilter;

const RENTS: [f64; 20] = [
    2298.0, 2400.0, 2979.0, 2500.0, 2175.0, 2695.0, 2350.0, 2825.0, 2100.0, 2450.0,
    3100.0, 2250.0, 2650.0, 2395.0, 2575.0, 2900.0, 2200.0, 2475.0, 2725.0, 2325.0,
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bootstrap Confidence Intervals ===\n");

    // Example 1: mean rent
    println!("1. Mean monthly rent (n = {})", RENTS.len());
    let rents = Sample::new(RENTS.to_vec())?;
    let dist = generate_seeded(&rents, &Mean, 10_000, 42)?;
    for level in [0.90, 0.95, 0.99] {
        let ci = confidence_interval(&dist, level)?;
        println!("  {ci}  (width {:.2})", ci.width());
    }
    println!("  Distribution: {}", serde_json::to_string(&dist.summary())?);

    // Example 2: proportion of "yes" answers
    println!("\n2. Survey proportion (n = 261)");
    let answers: Vec<&str> = (0..261).map(|i| if i < 87 { "yes" } else { "no" }).collect();
    let survey = Sample::new(answers)?;

    let config = BootstrapConfig::from_json(r#"{"repetitions": 10000, "seed": 2024}"#)
        .context("invalid bootstrap configuration")?;
    let bootstrap = Bootstrap::with_config(sequential(), config)?;

    for method in [IntervalMethod::Percentile, IntervalMethod::StandardError] {
        let result = bootstrap
            .clone()
            .with_method(method)
            .run(&survey, &Proportion::of("yes"))?;
        println!(
            "  {:?}: {}  ({:.1?})",
            method, result.interval, result.elapsed
        );
        println!("  {}", serde_json::to_string(&result.interval)?);
    }

    Ok(())
}
