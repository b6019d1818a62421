//! Template Method
//!
//! A fixed recipe with steps filled in per beverage.
//!
//! Key concepts:
//! - Provided trait method as the template
//! - Required methods as the varying steps
//!
//! Run with: cargo run --example template_method

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", patterns::behavioral::template_method::demo());
}
