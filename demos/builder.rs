//! Builder
//!
//! A director drives a builder through a fixed sequence of steps.
//!
//! Key concepts:
//! - Step-by-step construction
//! - Missing parts are reported as `BuildError`
//! - The builder is empty again after `result`
//!
//! Run with: cargo run --example builder

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::creational::builder::demo());
}
