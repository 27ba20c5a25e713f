//! The operation and assumption vocabularies.

mod loader;

use std::path::Path;

use rustc_hash::FxHashMap;
use traceseq_core::config::TraceseqConfig;
use traceseq_core::errors::{OntologyError, ValidationError};
use traceseq_core::types::AssumptionRef;

pub use loader::{parse_assumption_document, parse_operation_document};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationClass {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumptionClass {
    pub name: String,
    pub description: Option<String>,
    /// Values accepted in the `class:value` form. Empty means only the bare
    /// class is accepted.
    pub allowed_values: Vec<String>,
}

/// Read-only vocabulary loaded once per command and passed to validators.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    version: String,
    operations: FxHashMap<String, OperationClass>,
    assumptions: FxHashMap<String, AssumptionClass>,
}

impl Ontology {
    /// An empty vocabulary. Populate with [`with_operation`](Self::with_operation)
    /// and [`with_assumption`](Self::with_assumption).
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    pub fn with_operation(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.operations.insert(
            name.clone(),
            OperationClass {
                name,
                description: None,
            },
        );
        self
    }

    pub fn with_assumption<I, V>(mut self, name: impl Into<String>, allowed_values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        self.assumptions.insert(
            name.clone(),
            AssumptionClass {
                name,
                description: None,
                allowed_values: allowed_values.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    /// Load both definition documents.
    ///
    /// The ontology version is the operation document's `version`, else the
    /// assumption document's, else `default_version`.
    pub fn load(
        operation_path: &Path,
        assumption_path: &Path,
        default_version: &str,
    ) -> Result<Self, OntologyError> {
        let ops_text = read(operation_path)?;
        let assumptions_text = read(assumption_path)?;
        let ontology = Self::from_yaml(
            &ops_text,
            &operation_path.display().to_string(),
            &assumptions_text,
            &assumption_path.display().to_string(),
            default_version,
        )?;
        tracing::debug!(
            version = %ontology.version,
            operations = ontology.operations.len(),
            assumptions = ontology.assumptions.len(),
            "loaded ontology"
        );
        Ok(ontology)
    }

    /// Load the project's ontology from the configured locations.
    pub fn load_for_project(root: &Path, config: &TraceseqConfig) -> Result<Self, OntologyError> {
        Self::load(
            &config.operation_ontology_path(root),
            &config.assumption_ontology_path(root),
            &config.ontology.default_version,
        )
    }

    /// Build from document text. `*_origin` names the source in errors.
    pub fn from_yaml(
        operation_yaml: &str,
        operation_origin: &str,
        assumption_yaml: &str,
        assumption_origin: &str,
        default_version: &str,
    ) -> Result<Self, OntologyError> {
        let (op_version, operations) = parse_operation_document(operation_yaml, operation_origin)?;
        let (assumption_version, assumptions) =
            parse_assumption_document(assumption_yaml, assumption_origin)?;

        Ok(Self {
            version: op_version
                .or(assumption_version)
                .unwrap_or_else(|| default_version.to_string()),
            operations: operations
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
            assumptions: assumptions
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn validate_operation(&self, op_class: &str) -> bool {
        self.operations.contains_key(op_class)
    }

    pub fn validate_assumption(&self, assumption: &str) -> bool {
        self.check_assumption(assumption).is_ok()
    }

    pub fn check_operation(&self, op_class: &str) -> Result<(), ValidationError> {
        if self.validate_operation(op_class) {
            Ok(())
        } else {
            Err(ValidationError::UnknownOperation {
                op_class: op_class.to_string(),
            })
        }
    }

    /// Check a bare `class` or qualified `class:value` assumption.
    pub fn check_assumption(&self, assumption: &str) -> Result<(), ValidationError> {
        let parsed = AssumptionRef::parse(assumption);
        let Some(class) = self.assumptions.get(parsed.class) else {
            return Err(ValidationError::UnknownAssumptionClass {
                assumption: assumption.to_string(),
                class: parsed.class.to_string(),
            });
        };

        let Some(value) = parsed.value else {
            return Ok(());
        };
        if class.allowed_values.is_empty() {
            return Err(ValidationError::ValueNotPermitted {
                assumption: assumption.to_string(),
                class: class.name.clone(),
            });
        }
        if class.allowed_values.iter().any(|v| v == value) {
            Ok(())
        } else {
            Err(ValidationError::DisallowedValue {
                assumption: assumption.to_string(),
                class: class.name.clone(),
                value: value.to_string(),
                allowed: class.allowed_values.join(", "),
            })
        }
    }

    pub fn operation_class(&self, name: &str) -> Option<&OperationClass> {
        self.operations.get(name)
    }

    pub fn assumption_class(&self, name: &str) -> Option<&AssumptionClass> {
        self.assumptions.get(name)
    }

    /// Operation class names, sorted.
    pub fn operation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Assumption class names, sorted.
    pub fn assumption_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.assumptions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn read(path: &Path) -> Result<String, OntologyError> {
    std::fs::read_to_string(path).map_err(|source| {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            OntologyError::FileNotFound { path }
        } else {
            OntologyError::Unreadable { path, source }
        }
    })
}
