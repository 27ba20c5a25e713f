//! Shared constants for traceseq.

/// traceseq version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Persisted layout ----

/// Directory (relative to the project root) holding index and node records.
pub const DEFAULT_STATE_DIR: &str = ".traceseq";

/// Checksum index document name inside the state directory.
pub const DEFAULT_INDEX_FILE: &str = "index.json";

/// Node record directory name inside the state directory.
pub const DEFAULT_NODES_DIR: &str = "nodes";

/// File extension of node records.
pub const DEFAULT_NODE_EXTENSION: &str = "yaml";

/// Advisory lock file name inside the state directory.
pub const DEFAULT_LOCK_FILE: &str = ".lock";

/// Whether index updates take the advisory project lock by default.
pub const DEFAULT_LOCK_INDEX: bool = true;

/// Project configuration file name at the project root.
pub const CONFIG_FILE_NAME: &str = "traceseq.toml";

// ---- Ontology ----

/// Directory (relative to the project root) holding ontology definitions.
pub const DEFAULT_ONTOLOGY_DIR: &str = "core";

/// Operation vocabulary definition file.
pub const DEFAULT_OPERATION_ONTOLOGY: &str = "operation_ontology.yaml";

/// Assumption vocabulary definition file.
pub const DEFAULT_ASSUMPTION_ONTOLOGY: &str = "assumption_ontology.yaml";

/// Top-level key of the operation vocabulary document.
pub const OPERATION_CLASSES_KEY: &str = "operation_classes";

/// Top-level key of the assumption vocabulary document.
pub const ASSUMPTION_CLASSES_KEY: &str = "assumption_classes";

/// Ontology version used when neither definition document declares one.
pub const DEFAULT_ONTOLOGY_VERSION: &str = "0.1.0";

// ---- Trace nodes ----

/// Textual format of node timestamps (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Literal parent value meaning "no parent".
pub const ROOT_PARENT_SENTINEL: &str = "null";

/// Separator between an assumption class and its value.
pub const ASSUMPTION_VALUE_SEPARATOR: char = ':';

/// Data class recorded when the caller does not supply one.
pub const DEFAULT_DATA_CLASS: &str = "unknown";

/// Environment language recorded in new nodes.
pub const DEFAULT_ENV_LANGUAGE: &str = "rust";

/// Environment tool recorded in new nodes.
pub const DEFAULT_ENV_TOOL: &str = "traceseq";

// ---- Hashing ----

/// Read buffer size for file checksums.
pub const CHECKSUM_BUFFER_SIZE: usize = 32_768;

/// Name of the default checksum algorithm.
pub const DEFAULT_CHECKSUM_ALGORITHM: &str = "sha256";

// ---- Logging ----

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "TRACESEQ_LOG";

/// Tracing filter used when `TRACESEQ_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "traceseq=info";
