//! Caretaker and checkpoint error types.

use thiserror::Error;

/// Errors that can occur when reading snapshots or moving them in and out of
/// a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// No snapshot was saved at this position
    #[error("No snapshot at index {index} (history holds {len})")]
    SnapshotOutOfRange { index: usize, len: usize },

    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
