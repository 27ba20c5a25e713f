//! # traceseq-core
//!
//! Foundation crate for traceseq provenance tracking.
//! Defines the trace node data model, collaborator traits, errors, config,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::TraceseqConfig;
pub use errors::{TraceseqError, TraceseqResult};
pub use types::{Environment, InputDescriptor, Operation, OutputDescriptor, TraceId, TraceNode};
