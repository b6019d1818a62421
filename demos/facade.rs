//! Facade
//!
//! One home theater object drives the amplifier, DVD player and projector.
//!
//! Key concepts:
//! - Simple entry points over a subsystem
//! - Subsystem state stays inspectable
//!
//! Run with: cargo run --example facade

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::structural::facade::demo());
}
