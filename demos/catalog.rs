//! Pattern Catalog
//!
//! Runs one demonstration by name, or every demonstration in catalogue order.
//!
//! Key concepts:
//! - Patterns looked up by their snake_case name
//! - Grouping by category
//! - Each run prints under its own header
//!
//! Run with: cargo run --example catalog [pattern]
//!
//! Set `RUST_LOG=patterns=debug` to see diagnostic events on stderr.

use patterns::{Category, Pattern};
use tracing_subscriber::EnvFilter;

fn show(pattern: Pattern) {
    println!("== {} ({}) ==", pattern, pattern.category());
    print!("{}", pattern.run());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match std::env::args().nth(1) {
        Some(name) => match name.parse::<Pattern>() {
            Ok(pattern) => {
                println!("{}", pattern.intent());
                show(pattern);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Known patterns:");
                for category in [Category::Creational, Category::Structural, Category::Behavioral] {
                    let names: Vec<_> = Pattern::in_category(category).map(|p| p.name()).collect();
                    eprintln!("  {category}: {}", names.join(", "));
                }
                std::process::exit(2);
            }
        },
        None => {
            for (i, pattern) in Pattern::ALL.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                show(pattern);
            }
        }
    }
}
