//! Memento Checkpoint and Resume
//!
//! This example saves a caretaker's history as a checkpoint and resumes it
//! in a fresh caretaker, the way a long-running editor would survive a restart.
//!
//! Key concepts:
//! - JSON checkpoints for readability, bincode for compactness
//! - Version check on every decode
//! - Restoring from a resumed history
//!
//! Run with: cargo run --example memento_checkpoint

use patterns::behavioral::memento::{Caretaker, CheckpointError, HistoryCheckpoint, Originator};
use patterns::Transcript;
use tracing_subscriber::EnvFilter;

fn record_session(out: &mut Transcript) -> Caretaker {
    let mut originator = Originator::new();
    let mut caretaker = Caretaker::new();

    for state in [1, 2, 3] {
        originator.set_state(state, out);
        caretaker.add_memento(originator.save_to_memento());
    }

    caretaker
}

fn run() -> Result<(), CheckpointError> {
    let mut out = Transcript::new();

    println!("Run 1: Recording states");
    println!("----------------------------------------");
    let caretaker = record_session(&mut out);
    print!("{out}");

    let checkpoint = caretaker.checkpoint();
    let json = checkpoint.to_json()?;
    let bytes = checkpoint.to_bytes()?;
    println!("\nCheckpoint {} ({} snapshots)", checkpoint.id, checkpoint.snapshots.len());
    println!("  JSON:   {} bytes", json.len());
    println!("  binary: {} bytes", bytes.len());

    println!("\nRun 2: Resuming from checkpoint");
    println!("----------------------------------------");
    let resumed = Caretaker::resume(HistoryCheckpoint::from_json(&json)?)?;

    let mut out = Transcript::new();
    let mut originator = Originator::new();
    originator.restore_from_memento(resumed.get_memento(1)?, &mut out);
    print!("{out}");

    match resumed.get_memento(resumed.len()) {
        Ok(_) => println!("Unexpected snapshot past the end"),
        Err(err) => println!("Out-of-range access rejected: {err}"),
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== Memento Checkpoint Example ===\n");

    if let Err(err) = run() {
        eprintln!("Checkpoint failed: {err}");
        std::process::exit(1);
    }

    println!("\n=== Example Complete ===");
}
