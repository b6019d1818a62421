//! Flyweight
//!
//! Flyweights with the same key are shared instead of recreated.
//!
//! Key concepts:
//! - Intrinsic state cached by key
//! - Extrinsic state passed per call
//! - Sharing through `Rc`
//!
//! Run with: cargo run --example flyweight

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::structural::flyweight::demo());
}
