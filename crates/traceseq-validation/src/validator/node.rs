//! Per-node checks against the ontology and the required-field schema.

use traceseq_core::errors::ValidationError;
use traceseq_core::types::{TraceId, TraceNode};

use crate::ontology::Ontology;

/// Outcome of validating one node. Holds every failure, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReport {
    pub trace_id: TraceId,
    pub issues: Vec<ValidationError>,
}

impl NodeReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate `node`: operation class, each assumption, then required fields.
pub fn validate_node(node: &TraceNode, ontology: &Ontology) -> NodeReport {
    let mut issues = Vec::new();

    // An empty op_class is reported once, as a missing field.
    if !node.operation.op_class.is_empty() {
        if let Err(e) = ontology.check_operation(&node.operation.op_class) {
            issues.push(e);
        }
    }

    issues.extend(
        node.assumptions
            .iter()
            .filter_map(|a| ontology.check_assumption(a).err()),
    );

    issues.extend(
        required_fields(node)
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| ValidationError::EmptyField { field }),
    );

    for issue in &issues {
        tracing::warn!(trace_id = %node.trace_id, %issue, "node failed validation");
    }

    NodeReport {
        trace_id: node.trace_id.clone(),
        issues,
    }
}

fn required_fields(node: &TraceNode) -> [(&'static str, &str); 11] {
    [
        ("trace_id", node.trace_id.as_str()),
        ("timestamp", node.timestamp.as_str()),
        ("data_class", node.data_class.as_str()),
        ("operation.op_class", node.operation.op_class.as_str()),
        ("operation.method", node.operation.method.as_str()),
        ("input.checksum", node.input.checksum.as_str()),
        ("output.checksum", node.output.checksum.as_str()),
        ("environment.language", node.environment.language.as_str()),
        ("environment.tool", node.environment.tool.as_str()),
        ("environment.version", node.environment.version.as_str()),
        ("ontology_version", node.ontology_version.as_str()),
    ]
}
