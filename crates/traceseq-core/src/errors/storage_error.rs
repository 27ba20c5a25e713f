//! Storage errors for the node store and checksum index.

use std::path::PathBuf;

use super::error_code::{self, TraceErrorCode};

/// Errors that can occur while persisting or loading provenance records.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize {path}: {message}")]
    Serialize { path: PathBuf, message: String },

    #[error("Corrupt record {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    #[error("Trace node not found: {trace_id}")]
    RecordNotFound { trace_id: String },

    #[error("Failed to lock {path}: {source}")]
    LockFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StorageError {
    /// Whether this error means "no such record" rather than an I/O failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}

impl TraceErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RecordNotFound { .. } => error_code::RECORD_NOT_FOUND,
            Self::Corrupt { .. } => error_code::INDEX_CORRUPT,
            Self::LockFailed { .. } => error_code::LOCK_FAILED,
            Self::Io { .. } | Self::Serialize { .. } => error_code::STORAGE_ERROR,
        }
    }
}
