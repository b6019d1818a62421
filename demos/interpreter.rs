//! Interpreter
//!
//! Small arithmetic expressions evaluated against variable bindings.
//!
//! Key concepts:
//! - Owned expression tree
//! - Context lookups
//! - Unbound variables are errors
//!
//! Run with: cargo run --example interpreter

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::interpreter::demo());
}
