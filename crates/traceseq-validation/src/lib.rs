//! # traceseq-validation
//!
//! Checks trace nodes against a closed vocabulary and checks resolved
//! lineages for structural integrity.
//!
//! ## Node checks
//! 1. **Operation**: `op_class` is a known operation class
//! 2. **Assumptions**: each class is known; a `class:value` form is only
//!    accepted when the class enumerates `allowed_values` and lists the value
//! 3. **Required fields**: identity, operation, checksums, environment and
//!    ontology version are non-empty
//!
//! ## Lineage checks
//! Every step passes the node checks and links to the previous step.
//! Failures are accumulated, never short-circuited.

pub mod ontology;
pub mod validator;

pub use ontology::{AssumptionClass, OperationClass, Ontology};
pub use validator::{
    validate_lineage, validate_node, validate_resolved, LineageReport, NodeReport, StepReport,
};
