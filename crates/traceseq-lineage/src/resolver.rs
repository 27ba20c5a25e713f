//! Lineage resolution: walk parent links back to the root.

use rustc_hash::FxHashSet;
use serde::Serialize;
use traceseq_core::types::{TraceId, TraceNode};

use crate::source::NodeSource;

/// An ordered ancestry, oldest (root) first, the requested node last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lineage {
    /// The walk reached a root node.
    Complete { nodes: Vec<TraceNode> },
    /// The walk stopped at an id that could not be loaded. `nodes` holds
    /// what was gathered before that point and may be empty.
    Truncated {
        nodes: Vec<TraceNode>,
        missing: TraceId,
        reason: String,
    },
}

impl Lineage {
    pub fn nodes(&self) -> &[TraceNode] {
        match self {
            Self::Complete { nodes } | Self::Truncated { nodes, .. } => nodes,
        }
    }

    pub fn into_nodes(self) -> Vec<TraceNode> {
        match self {
            Self::Complete { nodes } | Self::Truncated { nodes, .. } => nodes,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    pub fn is_truncated(&self) -> bool {
        !self.is_complete()
    }

    /// The id the walk could not load, for a truncated lineage.
    pub fn missing(&self) -> Option<&TraceId> {
        match self {
            Self::Complete { .. } => None,
            Self::Truncated { missing, .. } => Some(missing),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// The node the lineage was resolved for.
    pub fn head(&self) -> Option<&TraceNode> {
        self.nodes().last()
    }

    pub fn root(&self) -> Option<&TraceNode> {
        self.nodes().first()
    }

    pub fn trace_ids(&self) -> Vec<&TraceId> {
        self.nodes().iter().map(|n| &n.trace_id).collect()
    }
}

/// Resolve the ancestry of `start`.
///
/// Runs in O(depth) with no depth bound. A link that cannot be loaded ends
/// the walk with [`Lineage::Truncated`]; an unknown `start` gives an empty,
/// truncated lineage. A parent link that revisits a node already on the
/// chain also truncates.
pub fn resolve<S>(start: &TraceId, source: &S) -> Lineage
where
    S: NodeSource + ?Sized,
{
    let mut chain: Vec<TraceNode> = Vec::new();
    let mut seen: FxHashSet<TraceId> = FxHashSet::default();
    let mut current = start.clone();

    loop {
        if !seen.insert(current.clone()) {
            let reason = format!("parent link revisits '{current}'");
            tracing::warn!(start = %start, %current, "lineage cycle detected");
            return truncated(chain, current, reason);
        }

        let node = match source.load_node(&current) {
            Ok(node) => node,
            Err(e) => {
                tracing::warn!(
                    start = %start,
                    missing = %current,
                    depth = chain.len(),
                    error = %e,
                    "lineage truncated"
                );
                return truncated(chain, current, e.to_string());
            }
        };

        let parent = node.parent.clone();
        chain.push(node);
        match parent {
            Some(parent) => current = parent,
            None => break,
        }
    }

    chain.reverse();
    tracing::debug!(start = %start, depth = chain.len(), "lineage resolved");
    Lineage::Complete { nodes: chain }
}

fn truncated(mut chain: Vec<TraceNode>, missing: TraceId, reason: String) -> Lineage {
    chain.reverse();
    Lineage::Truncated {
        nodes: chain,
        missing,
        reason,
    }
}
