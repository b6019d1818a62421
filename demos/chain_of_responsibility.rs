//! Chain of Responsibility
//!
//! Requests travel along handlers until one accepts them.
//!
//! Key concepts:
//! - Handlers tried in order
//! - Unhandled requests are reported
//! - Range-based handlers
//!
//! Run with: cargo run --example chain_of_responsibility

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::chain_of_responsibility::demo());
}
