//! Error types for the record store and blob backup.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted state.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "store")]
    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Database not initialized at {0}")]
    NotInitialized(String),

    #[error("Blob not found: {0}")]
    BlobNotFound(String),

    #[error("Blob key escapes the backup directory: {0}")]
    PathEscapesRoot(String),
}
