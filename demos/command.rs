//! Command
//!
//! A remote control triggers actions wrapped as command objects.
//!
//! Key concepts:
//! - Requests as objects
//! - Invoker decoupled from receiver
//!
//! Run with: cargo run --example command

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::command::demo());
}
