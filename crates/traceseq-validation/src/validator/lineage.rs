//! Sequential integrity of a lineage.

use traceseq_core::constants::ROOT_PARENT_SENTINEL;
use traceseq_core::errors::ValidationError;
use traceseq_core::types::TraceNode;
use traceseq_lineage::Lineage;

use super::node::{validate_node, NodeReport};
use crate::ontology::Ontology;

/// One lineage position: the node checks plus the parent-link check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: usize,
    pub node: NodeReport,
    pub link: Option<ValidationError>,
}

impl StepReport {
    pub fn passed(&self) -> bool {
        self.node.passed() && self.link.is_none()
    }

    pub fn issues(&self) -> impl Iterator<Item = &ValidationError> {
        self.node.issues.iter().chain(self.link.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineageReport {
    pub steps: Vec<StepReport>,
    /// Issues that belong to the chain as a whole, such as truncation.
    pub lineage_issues: Vec<ValidationError>,
}

impl LineageReport {
    pub fn all_valid(&self) -> bool {
        self.issue_count() == 0
    }

    pub fn issue_count(&self) -> usize {
        self.lineage_issues.len() + self.steps.iter().map(|s| s.issues().count()).sum::<usize>()
    }

    pub fn issues(&self) -> impl Iterator<Item = &ValidationError> {
        self.lineage_issues
            .iter()
            .chain(self.steps.iter().flat_map(StepReport::issues))
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.passed())
    }

    pub fn summary(&self) -> String {
        let n = self.steps.len();
        match self.issue_count() {
            0 => format!("all {n} steps valid"),
            k => format!("{k} issue(s) found across {n} steps"),
        }
    }
}

/// Validate a plain root-first slice. Position 0 must be a root.
pub fn validate_lineage(lineage: &[TraceNode], ontology: &Ontology) -> LineageReport {
    LineageReport {
        steps: check_steps(lineage, ontology, true),
        lineage_issues: Vec::new(),
    }
}

/// Validate a resolved lineage. A truncated chain is reported as a
/// lineage issue and its first step is not required to be a root.
pub fn validate_resolved(lineage: &Lineage, ontology: &Ontology) -> LineageReport {
    match lineage {
        Lineage::Complete { nodes } => validate_lineage(nodes, ontology),
        Lineage::Truncated {
            nodes,
            missing,
            reason,
        } => {
            let issue = ValidationError::TruncatedLineage {
                missing: missing.to_string(),
                reason: reason.clone(),
            };
            tracing::warn!(%issue, "lineage is truncated");
            LineageReport {
                steps: check_steps(nodes, ontology, false),
                lineage_issues: vec![issue],
            }
        }
    }
}

fn check_steps(nodes: &[TraceNode], ontology: &Ontology, require_root: bool) -> Vec<StepReport> {
    let steps: Vec<StepReport> = nodes
        .iter()
        .enumerate()
        .map(|(step, node)| StepReport {
            step,
            node: validate_node(node, ontology),
            link: check_link(step, node, step.checked_sub(1).map(|i| &nodes[i]), require_root),
        })
        .collect();

    let failed = steps.iter().filter(|s| !s.passed()).count();
    tracing::debug!(steps = steps.len(), failed, "lineage validated");
    steps
}

fn check_link(
    step: usize,
    node: &TraceNode,
    previous: Option<&TraceNode>,
    require_root: bool,
) -> Option<ValidationError> {
    let actual = node.parent_id().map(|p| p.as_str());
    let issue = match previous {
        Some(prev) if actual != Some(prev.trace_id.as_str()) => ValidationError::ParentMismatch {
            step,
            expected: prev.trace_id.to_string(),
            actual: actual.unwrap_or(ROOT_PARENT_SENTINEL).to_string(),
        },
        None if require_root => ValidationError::RootHasParent {
            actual: actual?.to_string(),
        },
        _ => return None,
    };
    tracing::warn!(step, %issue, "lineage link broken");
    Some(issue)
}
