//! Tool provenance stamped into every new trace node.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub language: String,
    pub tool: String,
    pub version: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            language: constants::DEFAULT_ENV_LANGUAGE.to_string(),
            tool: constants::DEFAULT_ENV_TOOL.to_string(),
            version: constants::VERSION.to_string(),
        }
    }
}
