//! Trace node: one immutable record of a single transformation step.
//!
//! # Examples
//!
//! ```
//! use traceseq_core::types::{Operation, TraceId, TraceNode};
//!
//! let node = TraceNode {
//!     trace_id: TraceId::from("n1"),
//!     operation: Operation {
//!         op_class: "normalization".into(),
//!         method: "TPM".into(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert!(node.is_root());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::identifiers::TraceId;

/// One step of provenance: what was applied to which input, producing which output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraceNode {
    pub trace_id: TraceId,
    /// Preceding node, or `None` for the root of a lineage.
    #[serde(default, with = "parent_sentinel")]
    pub parent: Option<TraceId>,
    /// Creation time, UTC, `YYYY-MM-DDTHH:MM:SSZ`.
    #[serde(default)]
    pub timestamp: String,
    /// Semantic type of the input artifact. Not checked against the ontology.
    #[serde(default)]
    pub data_class: String,
    #[serde(default)]
    pub operation: Operation,
    /// Bare class names or `class:value` pairs, in declaration order.
    #[serde(default)]
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub input: InputDescriptor,
    #[serde(default)]
    pub output: OutputDescriptor,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub ontology_version: String,
}

/// The transformation applied in a step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    pub op_class: String,
    pub method: String,
    pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDescriptor {
    pub shape: String,
    pub checksum: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputDescriptor {
    pub data_class: String,
    pub unit: String,
    pub checksum: String,
}

/// Provenance of the tool that generated a node. Metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub language: String,
    pub tool: String,
    pub version: String,
}

impl TraceNode {
    /// Whether this node starts a lineage.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn parent_id(&self) -> Option<&TraceId> {
        self.parent.as_ref()
    }
}

/// Serde adapter for the parent sentinel.
///
/// Writes `None` as a null. Reads null, the literal `"null"`, and the empty
/// string as the root sentinel, so records written by older tools still load.
mod parent_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::constants::ROOT_PARENT_SENTINEL;
    use crate::types::TraceId;

    pub fn serialize<S>(parent: &Option<TraceId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match parent {
            Some(id) => serializer.serialize_str(id.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TraceId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| {
            if s.is_empty() || s == ROOT_PARENT_SENTINEL {
                None
            } else {
                Some(TraceId::new(s))
            }
        }))
    }
}
