//! State
//!
//! A light switch changes behavior by swapping its state object.
//!
//! Key concepts:
//! - Consuming transitions with `self: Box<Self>`
//! - No self-replacing objects
//!
//! Run with: cargo run --example state

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::state::demo());
}
