//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint does not describe a run of the given automaton
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),

    /// The automaton to resume into failed its own validation
    #[error("Cannot resume into invalid configuration: {0}")]
    InvalidConfig(String),
}
