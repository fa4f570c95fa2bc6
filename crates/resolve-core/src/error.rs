//! Core error types for resolve-core.
//!
//! This module defines the error hierarchy using thiserror. Engine
//! errors are precondition violations surfaced to the host; the engine
//! never tries to guess intent and recover internally. Clock skew on
//! reads is not an error at all -- elapsed time clamps to zero so the
//! host always has something to render.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for resolve-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Engine precondition violations
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// State persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Precondition violations reported by the challenge engine.
///
/// These indicate a call-ordering bug in the host, not a recoverable
/// runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Operation called in a state that forbids it
    #[error("'{operation}' is not valid while the challenge is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    /// Habit index outside the fixed habit list
    #[error("Habit index {index} out of bounds (habit count: {len})")]
    HabitOutOfBounds { index: usize, len: usize },
}

/// State-persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to load the state file
    #[error("Failed to load state from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the state file
    #[error("Failed to save state to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse the state file
    #[error("Failed to parse state file: {0}")]
    ParseFailed(String),

    /// Data directory could not be resolved or created
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
