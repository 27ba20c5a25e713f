//! Top-level command error. Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, TraceErrorCode};
use super::{ChecksumError, ConfigError, OntologyError, StorageError, ValidationError};

/// Errors that abort a traceseq command.
#[derive(Debug, thiserror::Error)]
pub enum TraceseqError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Checksum error: {0}")]
    Checksum(#[from] ChecksumError),

    #[error("Ontology error: {0}")]
    Ontology(#[from] OntologyError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Annotation rejected with {} issue(s): {}", .issues.len(), join_issues(.issues))]
    Rejected { issues: Vec<ValidationError> },

    #[error("Parent trace node not found: {trace_id}")]
    ParentNotFound { trace_id: String },
}

/// Result alias used across traceseq commands.
pub type TraceseqResult<T> = Result<T, TraceseqError>;

fn join_issues(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TraceErrorCode for TraceseqError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Checksum(e) => e.error_code(),
            Self::Ontology(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Rejected { .. } => error_code::ANNOTATION_REJECTED,
            Self::ParentNotFound { .. } => error_code::PARENT_NOT_FOUND,
        }
    }
}
