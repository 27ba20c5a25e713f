//! The provenance data model.

pub mod assumption;
pub mod identifiers;
pub mod trace_node;

pub use assumption::AssumptionRef;
pub use identifiers::TraceId;
pub use trace_node::{Environment, InputDescriptor, Operation, OutputDescriptor, TraceNode};
