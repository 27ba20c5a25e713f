//! # traceseq
//!
//! Records how each artifact of a data pipeline was produced and answers
//! questions about it afterwards.
//!
//! - [`TraceEngine::annotate`] stores one transformation step
//! - [`TraceEngine::explain`] reconstructs an artifact's lineage
//! - [`TraceEngine::diff`] compares the lineages of two artifacts
//! - [`TraceEngine::validate`] checks a lineage against the ontology
//!
//! Artifacts are identified by content digest, so provenance follows the
//! bytes rather than the file name.

mod engine;
mod request;

pub use engine::TraceEngine;
pub use request::AnnotateRequest;

pub use traceseq_core::errors::{TraceseqError, TraceseqResult};
pub use traceseq_core::tracing::{init_tracing, init_tracing_with_filter};
pub use traceseq_core::types::{TraceId, TraceNode};
pub use traceseq_core::TraceseqConfig;
pub use traceseq_lineage::{FieldDiff, Lineage, LineageDiff, StepDiff, Trailing};
pub use traceseq_validation::{LineageReport, Ontology, StepReport};
