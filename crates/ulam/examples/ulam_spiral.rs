//! Ulam Spiral Examples
//!
//! This example demonstrates:
//! - Building a spiral and its prime mask with the pipeline builder
//! - Extracting labelled windows with the standalone operations
//! - Inspecting individual samples
//!
//! Set `RUST_LOG=ulam=debug` to see pipeline events.

use tracing_subscriber::EnvFilter;
use ulam::prelude::*;

fn main() -> Result<(), UlamError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(80));
    println!("Ulam Spiral Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_pipeline()?;
    example_2_standalone()?;

    Ok(())
}

/// Example 1: Pipeline
/// Builds a 7×7 spiral, its prime mask and 7×7 windows
fn example_1_pipeline() -> Result<(), UlamError> {
    println!("Example 1: Pipeline");
    println!("{}", "-".repeat(80));

    let result = Ulam::new().size(7).window_size(7).build()?.run();
    println!("{}", result);

    Ok(())
}

/// Example 2: Standalone Operations
/// Cuts a larger mask into 3×3 samples and inspects a few of them
fn example_2_standalone() -> Result<(), UlamError> {
    println!("Example 2: Standalone Operations");
    println!("{}", "-".repeat(80));

    let spiral = generate_spiral(101)?;
    let mask = generate_prime_mask(&spiral);
    let samples = extract_windows(&mask, 3)?;

    let positives = samples.labels.iter().filter(|&&v| v == 1).count();
    println!("Samples:   {}", samples.len());
    println!("Positives: {}", positives);
    println!();

    for k in [0, samples.len() / 2] {
        if let (Some((window, label)), Some((r, c))) = (samples.get(k), samples.center(k)) {
            println!("Sample {k} (center {r}, {c}, value {}):", spiral[[r, c]]);
            print!("{}", ulam::render(&window));
            println!("Label: {label}");
            println!();
        }
    }

    Ok(())
}
