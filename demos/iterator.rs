//! Iterator
//!
//! Sequential access to an aggregate without exposing its storage.
//!
//! Key concepts:
//! - `Option` marks the end of iteration
//! - Implements the standard `Iterator` trait
//!
//! Run with: cargo run --example iterator

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::iterator::demo());
}
