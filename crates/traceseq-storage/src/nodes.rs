//! Trace node store: one YAML record per node, keyed by trace id.

use std::fs;
use std::io::ErrorKind;

use traceseq_core::errors::StorageError;
use traceseq_core::types::{TraceId, TraceNode};

use crate::atomic::write_atomic;
use crate::index::ChecksumIndex;
use crate::layout::{is_safe_trace_id, ProjectLayout};
use crate::lock::with_project_lock;

#[derive(Debug, Clone)]
pub struct NodeStore {
    layout: ProjectLayout,
}

impl NodeStore {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Persist `node` and index both of its digests.
    ///
    /// The digests and the output data class are written into the node before
    /// serialization so the record and the index agree. The record write and
    /// the index update are not transactional.
    pub fn save(
        &self,
        node: &mut TraceNode,
        input_digest: &str,
        output_digest: &str,
        output_data_class: &str,
    ) -> Result<(), StorageError> {
        let trace_id = node.trace_id.clone();
        let path = self.layout.node_path(trace_id.as_str());
        if !is_safe_trace_id(trace_id.as_str()) {
            return Err(StorageError::Serialize {
                path,
                message: format!("trace id '{trace_id}' is not usable as a record name"),
            });
        }

        node.input.checksum = input_digest.to_string();
        node.output.checksum = output_digest.to_string();
        node.output.data_class = output_data_class.to_string();

        let text = serde_yaml::to_string(node).map_err(|e| StorageError::Serialize {
            path: path.clone(),
            message: e.to_string(),
        })?;

        with_project_lock(&self.layout, || {
            write_atomic(&path, text.as_bytes())?;
            tracing::debug!(%trace_id, path = %path.display(), "wrote trace node");

            let mut index = ChecksumIndex::load(&self.layout)?;
            for digest in [input_digest, output_digest] {
                if let Some(previous) = index.record(digest, trace_id.clone()) {
                    if previous != trace_id {
                        tracing::debug!(digest, %previous, %trace_id, "index entry reassigned");
                    }
                }
            }
            index.save(&self.layout)
        })
    }

    /// Load a node by id. Fails with `RecordNotFound` if no record exists.
    pub fn load(&self, trace_id: &str) -> Result<TraceNode, StorageError> {
        let not_found = || StorageError::RecordNotFound {
            trace_id: trace_id.to_string(),
        };
        if !is_safe_trace_id(trace_id) {
            return Err(not_found());
        }

        let path = self.layout.node_path(trace_id);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_found()),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        serde_yaml::from_str(&text).map_err(|e| StorageError::Corrupt {
            path,
            message: e.to_string(),
        })
    }

    pub fn exists(&self, trace_id: &str) -> bool {
        is_safe_trace_id(trace_id) && self.layout.node_path(trace_id).is_file()
    }

    /// All stored trace ids, sorted.
    pub fn list(&self) -> Result<Vec<TraceId>, StorageError> {
        let dir = self.layout.nodes_dir();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        let mut ids: Vec<TraceId> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == self.layout.node_extension())
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .filter(|stem| !stem.starts_with('.'))
                    .map(TraceId::from)
            })
            .collect();
        ids.sort();
        Ok(ids)
    }
}
