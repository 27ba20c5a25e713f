//! Resolved on-disk paths for one project root.

use std::path::{Path, PathBuf};

use traceseq_core::config::StorageConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    state_dir: PathBuf,
    index_path: PathBuf,
    nodes_dir: PathBuf,
    lock_path: PathBuf,
    node_extension: String,
    lock_index: bool,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, config: &StorageConfig) -> Self {
        let root = root.into();
        let state_dir = root.join(&config.state_dir);
        Self {
            index_path: state_dir.join(&config.index_file),
            nodes_dir: state_dir.join(&config.nodes_dir),
            lock_path: state_dir.join(&config.lock_file),
            node_extension: config.node_extension.clone(),
            lock_index: config.lock_index,
            state_dir,
            root,
        }
    }

    /// Layout with the compiled-in defaults (`.traceseq/...`).
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(root, &StorageConfig::default())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn nodes_dir(&self) -> &Path {
        &self.nodes_dir
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    pub fn node_extension(&self) -> &str {
        &self.node_extension
    }

    pub fn lock_index(&self) -> bool {
        self.lock_index
    }

    /// Record path for a trace id. Callers check [`is_safe_trace_id`] first.
    pub fn node_path(&self, trace_id: &str) -> PathBuf {
        self.nodes_dir
            .join(format!("{trace_id}.{}", self.node_extension))
    }
}

/// Trace ids become file names. Reject anything that could leave `nodes/`
/// or that would be a hidden file skipped by listing.
pub fn is_safe_trace_id(trace_id: &str) -> bool {
    !trace_id.is_empty() && !trace_id.starts_with('.') && !trace_id.contains(['/', '\\', '\0'])
}
