//! Error Types
//!
//! Validation, network and storage failures surfaced by the managers and
//! lookup clients. None of them are fatal: the UI turns each into a message.

use thiserror::Error;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// User input rejected before any side effect. The message is user-facing.
    #[error("{0}")]
    Validation(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Http { status: u16 },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Failures writing to the key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected the write: {0}")]
    Rejected(String),
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}
