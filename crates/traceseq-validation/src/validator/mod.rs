//! Node and lineage validation.

mod lineage;
mod node;

pub use lineage::{validate_lineage, validate_resolved, LineageReport, StepReport};
pub use node::{validate_node, NodeReport};
