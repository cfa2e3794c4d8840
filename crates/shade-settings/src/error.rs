// error.rs — Error types for the settings toggle subsystem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or persisting workspace settings.
#[derive(Debug, Error)]
pub enum ShadeError {
    /// A file I/O operation failed.
    #[error("I/O error at {}: {}", path.display(), source)]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse or serialize the settings document.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The settings document's root is not a JSON object.
    #[error("malformed settings document: root of {} is not a JSON object", path.display())]
    MalformedSettings { path: PathBuf },

    /// A notification dispatch failed (non-fatal).
    #[error("notification error: {0}")]
    NotificationError(String),
}
