//! Memento: capture an object's state as an opaque snapshot and restore it
//! later, without exposing the object's internals.
//!
//! The [`Caretaker`] keeps snapshots in an append-only, ordered history.
//! Restoring copies a snapshot's value back into the [`Originator`]; it never
//! changes the history itself.
//!
//! # Example
//!
//! ```rust
//! use patterns::behavioral::memento::{Caretaker, Originator};
//! use patterns::core::Transcript;
//!
//! let mut out = Transcript::new();
//! let mut originator = Originator::new();
//! let mut caretaker = Caretaker::new();
//!
//! originator.set_state(1, &mut out);
//! caretaker.add_memento(originator.save_to_memento());
//! originator.set_state(2, &mut out);
//!
//! let snapshot = caretaker.get_memento(0).unwrap();
//! originator.restore_from_memento(snapshot, &mut out);
//! assert_eq!(originator.state(), 1);
//! ```

use crate::core::Transcript;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod checkpoint;
pub mod error;

pub use checkpoint::{HistoryCheckpoint, CHECKPOINT_VERSION};
pub use error::CheckpointError;

/// Immutable snapshot of an [`Originator`]'s state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memento {
    state: i32,
    taken_at: DateTime<Utc>,
}

impl Memento {
    pub(crate) fn new(state: i32) -> Self {
        Self {
            state,
            taken_at: Utc::now(),
        }
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

/// The object whose state is saved and restored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Originator {
    state: i32,
}

impl Originator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn set_state(&mut self, state: i32, out: &mut Transcript) {
        self.state = state;
        out.line(format!("State set to: {}", self.state));
    }

    pub fn save_to_memento(&self) -> Memento {
        Memento::new(self.state)
    }

    pub fn restore_from_memento(&mut self, memento: &Memento, out: &mut Transcript) {
        self.state = memento.state;
        tracing::debug!(state = self.state, taken_at = %memento.taken_at, "originator restored");
        out.line(format!("State restored to: {}", self.state));
    }
}

/// Keeps snapshots without looking inside them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Caretaker {
    history: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot to the end of the history.
    pub fn add_memento(&mut self, memento: Memento) {
        tracing::debug!(index = self.history.len(), state = memento.state, "snapshot saved");
        self.history.push(memento);
    }

    /// The snapshot saved at `index`, counting from the oldest.
    pub fn get_memento(&self, index: usize) -> Result<&Memento, CheckpointError> {
        self.history
            .get(index)
            .ok_or(CheckpointError::SnapshotOutOfRange {
                index,
                len: self.history.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Memento> {
        self.history.iter()
    }

    /// Copy the whole history into a checkpoint.
    pub fn checkpoint(&self) -> HistoryCheckpoint {
        HistoryCheckpoint::new(self.history.clone())
    }

    /// Rebuild a caretaker from a checkpoint.
    pub fn resume(checkpoint: HistoryCheckpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        tracing::debug!(id = %checkpoint.id, snapshots = checkpoint.snapshots.len(), "caretaker resumed");
        Ok(Self {
            history: checkpoint.snapshots,
        })
    }
}

impl<'a> IntoIterator for &'a Caretaker {
    type Item = &'a Memento;
    type IntoIter = std::slice::Iter<'a, Memento>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn run(out: &mut Transcript) -> Result<(), CheckpointError> {
    let mut originator = Originator::new();
    let mut caretaker = Caretaker::new();

    originator.set_state(1, out);
    caretaker.add_memento(originator.save_to_memento());

    originator.set_state(2, out);
    caretaker.add_memento(originator.save_to_memento());

    originator.set_state(3, out);
    originator.restore_from_memento(caretaker.get_memento(0)?, out);

    Ok(())
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    if let Err(err) = run(&mut out) {
        out.line(err.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(states: &[i32]) -> (Originator, Caretaker) {
        let mut out = Transcript::new();
        let mut originator = Originator::new();
        let mut caretaker = Caretaker::new();
        for &state in states {
            originator.set_state(state, &mut out);
            caretaker.add_memento(originator.save_to_memento());
        }
        (originator, caretaker)
    }

    #[test]
    fn restore_returns_to_saved_state() {
        let (mut originator, caretaker) = history_of(&[1, 2]);
        let mut out = Transcript::new();
        originator.set_state(3, &mut out);

        originator.restore_from_memento(caretaker.get_memento(0).unwrap(), &mut out);

        assert_eq!(originator.state(), 1);
        assert_eq!(out.last(), Some("State restored to: 1"));
    }

    #[test]
    fn restore_does_not_touch_history() {
        let (mut originator, caretaker) = history_of(&[1, 2]);
        let before = caretaker.clone();
        let mut out = Transcript::new();

        originator.restore_from_memento(caretaker.get_memento(1).unwrap(), &mut out);
        originator.restore_from_memento(caretaker.get_memento(0).unwrap(), &mut out);

        assert_eq!(caretaker, before);
        let states: Vec<i32> = caretaker.iter().map(Memento::state).collect();
        assert_eq!(states, vec![1, 2]);
    }

    #[test]
    fn unsaved_state_is_not_in_history() {
        let (mut originator, caretaker) = history_of(&[1]);
        let mut out = Transcript::new();
        originator.set_state(9, &mut out);

        assert_eq!(caretaker.len(), 1);
        assert!(caretaker.iter().all(|m| m.state() != 9));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let (_, caretaker) = history_of(&[1, 2]);

        match caretaker.get_memento(2) {
            Err(CheckpointError::SnapshotOutOfRange { index, len }) => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("Expected SnapshotOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn snapshots_are_timestamped_in_order() {
        let (_, caretaker) = history_of(&[1, 2, 3]);
        let times: Vec<_> = caretaker.iter().map(Memento::taken_at).collect();

        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn checkpoint_resume_keeps_order() {
        let (_, caretaker) = history_of(&[4, 5, 6]);
        let resumed = Caretaker::resume(caretaker.checkpoint()).unwrap();

        assert_eq!(resumed, caretaker);
    }

    #[test]
    fn resume_rejects_other_versions() {
        let (_, caretaker) = history_of(&[1]);
        let mut checkpoint = caretaker.checkpoint();
        checkpoint.version = 0;

        assert!(matches!(
            Caretaker::resume(checkpoint),
            Err(CheckpointError::UnsupportedVersion { found: 0, .. })
        ));
    }

    #[test]
    fn empty_caretaker_has_nothing_to_restore() {
        let caretaker = Caretaker::new();
        assert!(caretaker.is_empty());
        assert!(caretaker.get_memento(0).is_err());
    }
}
