//! Mediator
//!
//! Components talk to each other only through a mediator.
//!
//! Key concepts:
//! - Registration table keyed by `ColleagueId`
//! - Broadcast to every other component
//!
//! Run with: cargo run --example mediator

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::mediator::demo());
}
