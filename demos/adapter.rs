//! Adapter
//!
//! An old printer is used through the new printer interface.
//!
//! Key concepts:
//! - Wrapping a borrowed adaptee
//! - Translating one method call into another
//!
//! Run with: cargo run --example adapter

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::structural::adapter::demo());
}
