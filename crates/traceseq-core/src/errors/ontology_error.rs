//! Ontology loading errors. All of them are fatal to the current command.

use super::error_code::{self, TraceErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    #[error("Ontology definition not found: {path}")]
    FileNotFound { path: String },

    #[error("Ontology definition {path} could not be read: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("Ontology parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Ontology definition {path} has no top-level `{section}` mapping")]
    MissingSection { path: String, section: String },
}

impl TraceErrorCode for OntologyError {
    fn error_code(&self) -> &'static str {
        error_code::ONTOLOGY_LOAD_FAILED
    }
}
