//! Proxy
//!
//! A proxy creates the real subject on first use and forwards to it.
//!
//! Key concepts:
//! - Lazy creation of the real subject
//! - Same interface for proxy and subject
//!
//! Run with: cargo run --example proxy

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::structural::proxy::demo());
}
