//! Prototype
//!
//! New objects are made by cloning an existing one behind a trait object.
//!
//! Key concepts:
//! - `clone_box` for boxed trait objects
//! - Clones are independent of their source
//!
//! Run with: cargo run --example prototype

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::creational::prototype::demo());
}
