//! Checksum index: content digest -> trace node that last produced or consumed it.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use traceseq_core::errors::StorageError;
use traceseq_core::types::TraceId;

use crate::atomic::write_atomic;
use crate::layout::ProjectLayout;

/// In-memory copy of `index.json`.
///
/// Loaded whole, mutated, and written back whole. Entries are last-writer-wins;
/// no history of earlier owners of a digest is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecksumIndex {
    entries: BTreeMap<String, TraceId>,
}

impl ChecksumIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the persisted index. A missing document is an empty index.
    pub fn load(layout: &ProjectLayout) -> Result<Self, StorageError> {
        let path = layout.index_path();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no checksum index yet");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let index: Self = serde_json::from_str(&text).map_err(|e| StorageError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), entries = index.len(), "loaded checksum index");
        Ok(index)
    }

    /// Write the full mapping back, creating the state directory if needed.
    pub fn save(&self, layout: &ProjectLayout) -> Result<(), StorageError> {
        let path = layout.index_path();
        let mut text = serde_json::to_string_pretty(self).map_err(|e| StorageError::Serialize {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        text.push('\n');
        write_atomic(path, text.as_bytes())?;
        tracing::debug!(path = %path.display(), entries = self.len(), "saved checksum index");
        Ok(())
    }

    /// Exact-match lookup. `None` means no provenance is known for this content.
    pub fn lookup(&self, digest: &str) -> Option<&TraceId> {
        self.entries.get(digest)
    }

    /// Point `digest` at `trace_id`, returning the id it displaced.
    pub fn record(&mut self, digest: impl Into<String>, trace_id: TraceId) -> Option<TraceId> {
        self.entries.insert(digest.into(), trace_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TraceId)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Digests currently owned by `trace_id`.
    pub fn entries_for(&self, trace_id: &TraceId) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, v)| *v == trace_id)
            .map(|(k, _)| k.as_str())
            .collect()
    }
}
