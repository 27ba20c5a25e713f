//! Validation failures.
//!
//! These are non-fatal: validators accumulate them per node and per step
//! and report them together rather than stopping at the first one.

use super::error_code::{self, TraceErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("operation class '{op_class}' is not in the operation ontology")]
    UnknownOperation { op_class: String },

    #[error("assumption '{assumption}': class '{class}' is not in the assumption ontology")]
    UnknownAssumptionClass { assumption: String, class: String },

    #[error("assumption '{assumption}': class '{class}' declares no allowed values, only the bare form is accepted")]
    ValueNotPermitted { assumption: String, class: String },

    #[error("assumption '{assumption}': value '{value}' is not allowed for class '{class}' (allowed: {allowed})")]
    DisallowedValue {
        assumption: String,
        class: String,
        value: String,
        allowed: String,
    },

    #[error("required field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("step {step}: parent '{actual}' does not match previous trace id '{expected}'")]
    ParentMismatch {
        step: usize,
        expected: String,
        actual: String,
    },

    #[error("step 0: lineage root has parent '{actual}'")]
    RootHasParent { actual: String },

    #[error("lineage truncated at '{missing}': {reason}")]
    TruncatedLineage { missing: String, reason: String },
}

impl TraceErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TruncatedLineage { .. } => error_code::LINEAGE_TRUNCATED,
            _ => error_code::VALIDATION_FAILED,
        }
    }
}
