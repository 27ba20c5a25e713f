//! Where the resolver reads trace nodes from.

use rustc_hash::FxHashMap;
use traceseq_core::errors::StorageError;
use traceseq_core::types::{TraceId, TraceNode};
use traceseq_storage::NodeStore;

/// Read access to trace nodes by id.
pub trait NodeSource {
    fn load_node(&self, trace_id: &TraceId) -> Result<TraceNode, StorageError>;
}

impl NodeSource for NodeStore {
    fn load_node(&self, trace_id: &TraceId) -> Result<TraceNode, StorageError> {
        self.load(trace_id.as_str())
    }
}

/// In-memory arena of nodes keyed by trace id. Each node refers to its
/// parent only through the parent's key.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: FxHashMap<TraceId, TraceNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert without checking the parent link. Replaces any node with the same id.
    pub fn insert(&mut self, node: TraceNode) -> Option<TraceNode> {
        self.nodes.insert(node.trace_id.clone(), node)
    }

    /// Insert only if the node is a root or its parent is already present.
    pub fn insert_linked(&mut self, node: TraceNode) -> Result<(), StorageError> {
        if let Some(parent) = &node.parent {
            if !self.nodes.contains_key(parent) {
                return Err(StorageError::RecordNotFound {
                    trace_id: parent.to_string(),
                });
            }
        }
        self.insert(node);
        Ok(())
    }

    pub fn get(&self, trace_id: &str) -> Option<&TraceNode> {
        self.nodes.get(trace_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<TraceNode> for NodeArena {
    fn from_iter<I: IntoIterator<Item = TraceNode>>(iter: I) -> Self {
        let mut arena = Self::new();
        for node in iter {
            arena.insert(node);
        }
        arena
    }
}

impl NodeSource for NodeArena {
    fn load_node(&self, trace_id: &TraceId) -> Result<TraceNode, StorageError> {
        self.nodes
            .get(trace_id)
            .cloned()
            .ok_or_else(|| StorageError::RecordNotFound {
                trace_id: trace_id.to_string(),
            })
    }
}
