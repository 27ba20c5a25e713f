//! Checksum provider errors.

use std::path::PathBuf;

use super::error_code::{self, TraceErrorCode};

/// Errors raised while computing a content digest.
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    #[error("File unreadable {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TraceErrorCode for ChecksumError {
    fn error_code(&self) -> &'static str {
        error_code::FILE_UNREADABLE
    }
}
