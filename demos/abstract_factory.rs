//! Abstract Factory
//!
//! A factory per product family hands out animals through a common trait.
//!
//! Key concepts:
//! - Factories as trait objects
//! - Client code never names a concrete animal
//! - Swapping the factory swaps the whole family
//!
//! Run with: cargo run --example abstract_factory

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::creational::abstract_factory::demo());
}
