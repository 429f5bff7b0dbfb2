//! Error types for the mock storage adapter
//!
//! This module provides a unified error handling system using `thiserror` for
//! the adapter and its value model.

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// Storage operation errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Value conversion errors
    #[error("Value error: {0}")]
    Value(#[from] ValueError),
}

/// Storage-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The storage instance was deleted; every later guarded operation fails
    #[error("storage has been deleted")]
    Deleted,

    /// A latency range whose lower bound exceeds its upper bound
    #[error("Invalid delay range: min {min_ms}ms is greater than max {max_ms}ms")]
    InvalidDelay {
        /// Requested lower bound
        min_ms: u64,
        /// Requested upper bound
        max_ms: u64,
    },
}

/// Errors raised while converting between `StorageValue` and typed data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A typed value could not be turned into a storage value
    #[error("Serialization failed: {reason}")]
    Serialize {
        /// What the converter reported
        reason: String,
    },

    /// A storage value could not be turned into the requested type
    #[error("Deserialization failed: {reason}")]
    Deserialize {
        /// What the converter reported
        reason: String,
    },
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience type alias for Storage Results
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Convenience type alias for Value Results
pub type ValueResult<T> = std::result::Result<T, ValueError>;
