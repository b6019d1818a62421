//! Bridge
//!
//! Remotes and devices vary independently.
//!
//! Key concepts:
//! - Abstraction holds a boxed implementation
//! - Refined abstraction adds mute
//! - Devices keep their own power state
//!
//! Run with: cargo run --example bridge

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::structural::bridge::demo());
}
