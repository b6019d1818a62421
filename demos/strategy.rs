//! Strategy
//!
//! An algorithm is swapped at runtime.
//!
//! Key concepts:
//! - Strategy held as a boxed trait object
//! - Empty context reports no strategy
//!
//! Run with: cargo run --example strategy

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::strategy::demo());
}
