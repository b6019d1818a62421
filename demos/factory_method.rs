//! Factory Method
//!
//! A creation function picks the concrete animal from a key.
//!
//! Key concepts:
//! - Key-based construction returning `Option`
//! - Unknown keys produce no animal
//! - Typed `AnimalKind` alternative
//!
//! Run with: cargo run --example factory_method

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::creational::factory_method::demo());
}
