//! Ontology loading and vocabulary properties.

use std::fs;
use std::path::Path;

use proptest::prelude::*;
use traceseq_core::config::TraceseqConfig;
use traceseq_core::errors::{OntologyError, ValidationError};
use traceseq_validation::Ontology;

const OPS: &str = "\
version: \"1.2.0\"
operation_classes:
  normalization:
    description: Scale counts to a common depth
  alignment:
  filtering:
";

const ASSUMPTIONS: &str = "\
version: \"9.9.9\"
assumption_classes:
  log_scaled:
  batch_corrected:
    allowed_values: [combat, limma]
  reference:
    allowed_values: [\"GRCh38\", \"GRCm39\"]
";

fn write_ontology(root: &Path, ops: &str, assumptions: &str) {
    let dir = root.join("core");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("operation_ontology.yaml"), ops).unwrap();
    fs::write(dir.join("assumption_ontology.yaml"), assumptions).unwrap();
}

fn sample() -> Ontology {
    Ontology::from_yaml(OPS, "ops", ASSUMPTIONS, "assumptions", "0.1.0").unwrap()
}

#[test]
fn loads_project_ontology_from_default_location() {
    let dir = tempfile::tempdir().unwrap();
    write_ontology(dir.path(), OPS, ASSUMPTIONS);

    let ontology = Ontology::load_for_project(dir.path(), &TraceseqConfig::default()).unwrap();

    assert_eq!(ontology.operation_names(), vec!["alignment", "filtering", "normalization"]);
    assert_eq!(
        ontology.assumption_names(),
        vec!["batch_corrected", "log_scaled", "reference"]
    );
    assert_eq!(
        ontology.operation_class("normalization").unwrap().description.as_deref(),
        Some("Scale counts to a common depth")
    );
}

#[test]
fn operation_document_version_wins() {
    assert_eq!(sample().version(), "1.2.0");
}

#[test]
fn assumption_version_used_when_operations_have_none() {
    let ops = "operation_classes:\n  normalization:\n";
    let ontology = Ontology::from_yaml(ops, "ops", ASSUMPTIONS, "a", "0.1.0").unwrap();
    assert_eq!(ontology.version(), "9.9.9");
}

#[test]
fn default_version_used_when_neither_document_has_one() {
    let ops = "operation_classes:\n  normalization:\n";
    let assumptions = "assumption_classes:\n  log_scaled:\n";
    let ontology = Ontology::from_yaml(ops, "ops", assumptions, "a", "0.3.0").unwrap();
    assert_eq!(ontology.version(), "0.3.0");
}

#[test]
fn missing_definition_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = Ontology::load_for_project(dir.path(), &TraceseqConfig::default()).unwrap_err();
    match err {
        OntologyError::FileNotFound { path } => assert!(path.ends_with("operation_ontology.yaml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unreadable_definition_is_not_reported_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    write_ontology(dir.path(), OPS, ASSUMPTIONS);
    let ops = dir.path().join("core/operation_ontology.yaml");
    fs::remove_file(&ops).unwrap();
    fs::create_dir(&ops).unwrap();

    let err = Ontology::load_for_project(dir.path(), &TraceseqConfig::default()).unwrap_err();
    match err {
        OntologyError::Unreadable { path, source } => {
            assert!(path.ends_with("operation_ontology.yaml"));
            assert_ne!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_assumption_document_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_ontology(dir.path(), OPS, "assumption_classes: [broken");
    let err = Ontology::load_for_project(dir.path(), &TraceseqConfig::default()).unwrap_err();
    assert!(matches!(err, OntologyError::ParseError { .. }));
}

#[test]
fn configured_ontology_dir_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let custom = dir.path().join("vocab");
    fs::create_dir_all(&custom).unwrap();
    fs::write(custom.join("operation_ontology.yaml"), OPS).unwrap();
    fs::write(custom.join("assumption_ontology.yaml"), ASSUMPTIONS).unwrap();

    let mut config = TraceseqConfig::default();
    config.ontology.dir = "vocab".into();
    let ontology = Ontology::load_for_project(dir.path(), &config).unwrap();
    assert!(ontology.validate_operation("alignment"));
}

#[test]
fn assumption_failures_name_the_problem() {
    let ontology = sample();

    assert_eq!(
        ontology.check_assumption("spike_in").unwrap_err(),
        ValidationError::UnknownAssumptionClass {
            assumption: "spike_in".into(),
            class: "spike_in".into(),
        }
    );
    assert_eq!(
        ontology.check_assumption("log_scaled:log2").unwrap_err(),
        ValidationError::ValueNotPermitted {
            assumption: "log_scaled:log2".into(),
            class: "log_scaled".into(),
        }
    );
    assert_eq!(
        ontology.check_assumption("batch_corrected:harmony").unwrap_err(),
        ValidationError::DisallowedValue {
            assumption: "batch_corrected:harmony".into(),
            class: "batch_corrected".into(),
            value: "harmony".into(),
            allowed: "combat, limma".into(),
        }
    );
}

#[test]
fn values_are_matched_verbatim() {
    let ontology = sample();
    assert!(ontology.validate_assumption("reference:GRCh38"));
    assert!(!ontology.validate_assumption("reference:grch38"));
    assert!(!ontology.validate_assumption("reference:"));
}

fn vocabulary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z_]{1,12}", 1..8).prop_map(|s| s.into_iter().collect())
}

proptest! {
    #[test]
    fn known_operations_validate_and_others_do_not(
        classes in vocabulary(),
        probe in "[a-z_]{1,12}",
    ) {
        let ontology = classes
            .iter()
            .fold(Ontology::new("t"), |o, c| o.with_operation(c.as_str()));
        for c in &classes {
            prop_assert!(ontology.validate_operation(c));
        }
        prop_assert_eq!(ontology.validate_operation(&probe), classes.contains(&probe));
    }

    #[test]
    fn qualified_assumption_valid_iff_value_is_allowed(
        v1 in "[a-z0-9]{1,6}",
        v2 in "[a-z0-9]{1,6}",
        value in "[a-z0-9]{1,6}",
    ) {
        let ontology = Ontology::new("t").with_assumption("cls", [v1.clone(), v2.clone()]);
        let expected = value == v1 || value == v2;
        prop_assert_eq!(ontology.validate_assumption(&format!("cls:{value}")), expected);
        prop_assert!(ontology.validate_assumption("cls"));
    }

    #[test]
    fn class_without_allowed_values_accepts_only_bare_form(value in ".{0,10}") {
        let ontology = Ontology::new("t").with_assumption("bare", Vec::<String>::new());
        prop_assert!(ontology.validate_assumption("bare"));
        let tagged = format!("bare:{value}");
        prop_assert!(!ontology.validate_assumption(&tagged));
    }
}
