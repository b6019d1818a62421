//! Singleton
//!
//! One lazily created instance shared through an explicit cell.
//!
//! Key concepts:
//! - `OnceCell` for lazy initialization
//! - Identity checked with `Rc::ptr_eq`
//! - No global mutable state
//!
//! Run with: cargo run --example singleton

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::creational::singleton::demo());
}
