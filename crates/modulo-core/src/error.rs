//! Core error types for modulo-core.
//!
//! This module defines the error hierarchy using thiserror. The sync
//! engine itself is total and never fails; errors come from user input
//! validation and from the state store.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for modulo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Malformed time-of-day string
    #[error("cannot parse '{input}' as a time of day")]
    TimeParse { input: String },

    /// A time-of-day value outside [0, 1440) minutes
    #[error("time of day {minutes} is outside the valid range of 0..1440 minutes")]
    MinutesOutOfRange { minutes: u16 },

    /// Over-length field value
    #[error("value for '{field}' is too long (max {max} bytes, got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    /// Empty field value where one is required
    #[error("value for '{field}' must not be empty")]
    Empty { field: &'static str },

    /// Out of bounds
    #[error("index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

/// Storage-specific errors.
///
/// A state file that exists but fails to decode is deliberately *not* an
/// error: the storage layer collapses it to "absent" so a half-written
/// document can never be partially applied.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the state file
    #[error("failed to read state from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the state file
    #[error("failed to write state to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the state document
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),

    /// No usable config directory on this platform
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
