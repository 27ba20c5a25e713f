//! Top-level traceseq configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EnvironmentConfig, OntologyConfig, StorageConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TRACESEQ_*`)
/// 2. Project config (`traceseq.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TraceseqConfig {
    pub storage: StorageConfig,
    pub ontology: OntologyConfig,
    pub environment: EnvironmentConfig,
}

impl TraceseqConfig {
    /// Load configuration for the project at `root`.
    ///
    /// A missing `traceseq.toml` is not an error; compiled defaults apply.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Unknown keys are ignored, missing keys take their defaults.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage.state_dir", &self.storage.state_dir),
            ("storage.index_file", &self.storage.index_file),
            ("storage.nodes_dir", &self.storage.nodes_dir),
            ("storage.node_extension", &self.storage.node_extension),
            ("storage.lock_file", &self.storage.lock_file),
            ("ontology.operation_file", &self.ontology.operation_file),
            ("ontology.assumption_file", &self.ontology.assumption_file),
            ("ontology.default_version", &self.ontology.default_version),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if self.storage.node_extension.starts_with('.') {
            return Err(ConfigError::ValidationFailed {
                field: "storage.node_extension".to_string(),
                message: "must not start with '.'".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `TRACESEQ_STATE_DIR`, `TRACESEQ_ONTOLOGY_DIR`, etc.
    fn apply_env_overrides(config: &mut TraceseqConfig) {
        if let Ok(val) = std::env::var("TRACESEQ_STATE_DIR") {
            config.storage.state_dir = val;
        }
        if let Ok(val) = std::env::var("TRACESEQ_ONTOLOGY_DIR") {
            config.ontology.dir = val;
        }
        if let Ok(val) = std::env::var("TRACESEQ_LOCK_INDEX") {
            if let Ok(v) = val.parse::<bool>() {
                config.storage.lock_index = v;
            }
        }
        if let Ok(val) = std::env::var("TRACESEQ_ONTOLOGY_VERSION") {
            config.ontology.default_version = val;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Absolute path of the operation vocabulary for the project at `root`.
    pub fn operation_ontology_path(&self, root: &Path) -> PathBuf {
        root.join(&self.ontology.dir)
            .join(&self.ontology.operation_file)
    }

    /// Absolute path of the assumption vocabulary for the project at `root`.
    pub fn assumption_ontology_path(&self, root: &Path) -> PathBuf {
        root.join(&self.ontology.dir)
            .join(&self.ontology.assumption_file)
    }
}
