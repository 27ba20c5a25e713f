//! Persisted layout configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the checksum index and node records live, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// State directory relative to the project root.
    pub state_dir: String,
    /// Checksum index document name inside `state_dir`.
    pub index_file: String,
    /// Node record directory inside `state_dir`.
    pub nodes_dir: String,
    /// Node record file extension.
    pub node_extension: String,
    /// Advisory lock file name inside `state_dir`.
    pub lock_file: String,
    /// Take the advisory lock around index read-modify-write.
    pub lock_index: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_dir: constants::DEFAULT_STATE_DIR.to_string(),
            index_file: constants::DEFAULT_INDEX_FILE.to_string(),
            nodes_dir: constants::DEFAULT_NODES_DIR.to_string(),
            node_extension: constants::DEFAULT_NODE_EXTENSION.to_string(),
            lock_file: constants::DEFAULT_LOCK_FILE.to_string(),
            lock_index: constants::DEFAULT_LOCK_INDEX,
        }
    }
}
