//! Decorator
//!
//! Wrappers add behavior around a base component.
//!
//! Key concepts:
//! - Each decorator owns what it wraps
//! - Stacking decorators in any order
//!
//! Run with: cargo run --example decorator

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::structural::decorator::demo());
}
