//! Observer
//!
//! Observers are notified whenever the subject's state changes.
//!
//! Key concepts:
//! - Attach and detach by identity
//! - Notification in attach order
//!
//! Run with: cargo run --example observer

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::observer::demo());
}
