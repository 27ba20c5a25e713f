//! Ontology source configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OntologyConfig {
    /// Directory holding the definition documents, relative to the project root.
    pub dir: String,
    /// Operation vocabulary document inside `dir`.
    pub operation_file: String,
    /// Assumption vocabulary document inside `dir`.
    pub assumption_file: String,
    /// Version stamped into nodes when the documents declare none.
    pub default_version: String,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            dir: constants::DEFAULT_ONTOLOGY_DIR.to_string(),
            operation_file: constants::DEFAULT_OPERATION_ONTOLOGY.to_string(),
            assumption_file: constants::DEFAULT_ASSUMPTION_ONTOLOGY.to_string(),
            default_version: constants::DEFAULT_ONTOLOGY_VERSION.to_string(),
        }
    }
}
