//! Composite
//!
//! Files and directories form a tree printed with indentation.
//!
//! Key concepts:
//! - Arena of nodes addressed by `NodeId`
//! - Single parent per node, no cycles
//! - Recursive display
//!
//! Run with: cargo run --example composite

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::structural::composite::demo());
}
