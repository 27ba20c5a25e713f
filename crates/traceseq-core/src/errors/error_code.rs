//! TraceErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers (CLI exit handling, bindings) can match on.
pub trait TraceErrorCode {
    /// Returns the error code string (e.g., "RECORD_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const FILE_UNREADABLE: &str = "FILE_UNREADABLE";
pub const ONTOLOGY_LOAD_FAILED: &str = "ONTOLOGY_LOAD_FAILED";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const INDEX_CORRUPT: &str = "INDEX_CORRUPT";
pub const RECORD_NOT_FOUND: &str = "RECORD_NOT_FOUND";
pub const LOCK_FAILED: &str = "LOCK_FAILED";
pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const LINEAGE_TRUNCATED: &str = "LINEAGE_TRUNCATED";
pub const ANNOTATION_REJECTED: &str = "ANNOTATION_REJECTED";
pub const PARENT_NOT_FOUND: &str = "PARENT_NOT_FOUND";
