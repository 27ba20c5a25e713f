//! Error handling for traceseq.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod checksum_error;
pub mod config_error;
pub mod error_code;
pub mod ontology_error;
pub mod storage_error;
pub mod traceseq_error;
pub mod validation_error;

pub use checksum_error::ChecksumError;
pub use config_error::ConfigError;
pub use error_code::TraceErrorCode;
pub use ontology_error::OntologyError;
pub use storage_error::StorageError;
pub use traceseq_error::{TraceseqError, TraceseqResult};
pub use validation_error::ValidationError;
