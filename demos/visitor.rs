//! Visitor
//!
//! A visitor performs an operation over elements via double dispatch.
//!
//! Key concepts:
//! - `accept` routes to the matching `visit_*` method
//! - New operations without touching elements
//!
//! Run with: cargo run --example visitor

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::visitor::demo());
}
