//! Parsing of ontology definition documents.
//!
//! ```yaml
//! version: "1.2.0"            # optional
//! assumption_classes:
//!   log_scaled:               # bare entry, may be null
//!   batch_corrected:
//!     description: Batch effects removed
//!     allowed_values: [combat, limma]
//! ```

use serde_yaml::{Mapping, Value};
use traceseq_core::constants::{ASSUMPTION_CLASSES_KEY, OPERATION_CLASSES_KEY};
use traceseq_core::errors::OntologyError;

use super::{AssumptionClass, OperationClass};

type Parsed<T> = (Option<String>, Vec<T>);

pub fn parse_operation_document(
    yaml: &str,
    origin: &str,
) -> Result<Parsed<OperationClass>, OntologyError> {
    let (version, section) = parse_section(yaml, origin, OPERATION_CLASSES_KEY)?;
    let classes = section
        .into_iter()
        .map(|(name, entry)| OperationClass {
            description: description(&entry),
            name,
        })
        .collect();
    Ok((version, classes))
}

pub fn parse_assumption_document(
    yaml: &str,
    origin: &str,
) -> Result<Parsed<AssumptionClass>, OntologyError> {
    let (version, section) = parse_section(yaml, origin, ASSUMPTION_CLASSES_KEY)?;
    let classes = section
        .into_iter()
        .map(|(name, entry)| {
            let allowed_values = allowed_values(&entry, &name, origin)?;
            Ok(AssumptionClass {
                description: description(&entry),
                allowed_values,
                name,
            })
        })
        .collect::<Result<_, OntologyError>>()?;
    Ok((version, classes))
}

fn parse_section(
    yaml: &str,
    origin: &str,
    section: &str,
) -> Result<(Option<String>, Vec<(String, Value)>), OntologyError> {
    let doc: Value = serde_yaml::from_str(yaml).map_err(|e| OntologyError::ParseError {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    let missing = || OntologyError::MissingSection {
        path: origin.to_string(),
        section: section.to_string(),
    };

    let Value::Mapping(root) = doc else {
        return Err(missing());
    };
    let version = root.get("version").and_then(scalar_to_string);

    let entries = match root.get(section) {
        Some(Value::Mapping(map)) => map,
        // `operation_classes:` with nothing beneath it is an empty vocabulary
        Some(Value::Null) => return Ok((version, Vec::new())),
        _ => return Err(missing()),
    };

    let classes = entries
        .iter()
        .map(|(key, entry)| {
            let name = scalar_to_string(key).ok_or_else(|| OntologyError::ParseError {
                path: origin.to_string(),
                message: format!("non-scalar class name under `{section}`"),
            })?;
            Ok((name, entry.clone()))
        })
        .collect::<Result<_, OntologyError>>()?;
    Ok((version, classes))
}

fn entry_map(entry: &Value) -> Option<&Mapping> {
    match entry {
        Value::Mapping(map) => Some(map),
        _ => None,
    }
}

fn description(entry: &Value) -> Option<String> {
    entry_map(entry)?.get("description").and_then(scalar_to_string)
}

fn allowed_values(entry: &Value, class: &str, origin: &str) -> Result<Vec<String>, OntologyError> {
    let Some(raw) = entry_map(entry).and_then(|m| m.get("allowed_values")) else {
        return Ok(Vec::new());
    };
    match raw {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                scalar_to_string(item).ok_or_else(|| OntologyError::ParseError {
                    path: origin.to_string(),
                    message: format!("class '{class}': allowed_values must be scalars"),
                })
            })
            .collect(),
        _ => Err(OntologyError::ParseError {
            path: origin.to_string(),
            message: format!("class '{class}': allowed_values must be a list"),
        }),
    }
}

/// Strings, numbers and booleans all name a value; `1.0` and `true` are
/// compared textually against assumption values.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
