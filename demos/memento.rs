//! Memento
//!
//! State snapshots are saved and restored later.
//!
//! Key concepts:
//! - Opaque snapshots
//! - Bounds-checked history access
//! - Serializable checkpoints
//!
//! Run with: cargo run --example memento

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::memento::demo());
}
