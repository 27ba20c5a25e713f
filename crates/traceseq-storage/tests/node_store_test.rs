//! Node store round-trips and index side effects.

use std::collections::BTreeMap;

use traceseq_core::config::StorageConfig;
use traceseq_core::errors::StorageError;
use traceseq_core::types::*;
use traceseq_storage::{ChecksumIndex, NodeStore, ProjectLayout};

fn store() -> (tempfile::TempDir, NodeStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = NodeStore::new(ProjectLayout::with_defaults(dir.path()));
    (dir, store)
}

fn node(id: &str, parent: Option<&str>) -> TraceNode {
    let mut parameters = BTreeMap::new();
    parameters.insert("pseudocount".to_string(), "1".to_string());
    parameters.insert("gene_length_source".to_string(), "gencode v44".to_string());
    TraceNode {
        trace_id: TraceId::from(id),
        parent: parent.map(TraceId::from),
        timestamp: "2024-03-05T10:15:00Z".into(),
        data_class: "raw_counts".into(),
        operation: Operation {
            op_class: "normalization".into(),
            method: "TPM".into(),
            parameters,
        },
        assumptions: vec!["log_scaled".into(), "batch_corrected:combat".into()],
        input: InputDescriptor {
            shape: "20000x48".into(),
            checksum: String::new(),
        },
        output: OutputDescriptor {
            data_class: String::new(),
            unit: "TPM".into(),
            checksum: String::new(),
        },
        environment: Environment {
            language: "rust".into(),
            tool: "traceseq".into(),
            version: "0.1.0".into(),
        },
        ontology_version: "0.1.0".into(),
    }
}

#[test]
fn save_then_load_is_lossless() {
    let (_dir, store) = store();
    let mut original = node("n1", None);
    store
        .save(&mut original, "in-digest", "out-digest", "normalized_counts")
        .unwrap();

    let loaded = store.load("n1").unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loaded.input.checksum, "in-digest");
    assert_eq!(loaded.output.checksum, "out-digest");
    assert_eq!(loaded.output.data_class, "normalized_counts");
}

#[test]
fn save_indexes_input_and_output_digests() {
    let (_dir, store) = store();
    store
        .save(&mut node("n1", None), "h-in", "h-out", "normalized_counts")
        .unwrap();

    let index = ChecksumIndex::load(store.layout()).unwrap();
    assert_eq!(index.lookup("h-in").map(TraceId::as_str), Some("n1"));
    assert_eq!(index.lookup("h-out").map(TraceId::as_str), Some("n1"));
}

#[test]
fn later_node_takes_over_shared_digest() {
    let (_dir, store) = store();
    store.save(&mut node("n1", None), "h1", "h2", "x").unwrap();
    store.save(&mut node("n2", Some("n1")), "h2", "h3", "y").unwrap();

    let index = ChecksumIndex::load(store.layout()).unwrap();
    assert_eq!(index.lookup("h1").map(TraceId::as_str), Some("n1"));
    assert_eq!(index.lookup("h2").map(TraceId::as_str), Some("n2"));
    assert_eq!(index.lookup("h3").map(TraceId::as_str), Some("n2"));
}

#[test]
fn load_unknown_id_is_record_not_found() {
    let (_dir, store) = store();
    let err = store.load("missing").unwrap_err();
    assert!(matches!(err, StorageError::RecordNotFound { ref trace_id } if trace_id == "missing"));
}

#[test]
fn path_like_ids_never_touch_the_filesystem() {
    let (_dir, store) = store();
    assert!(store.load("../index").unwrap_err().is_not_found());
    assert!(!store.exists("../index"));

    let mut bad = node("../escape", None);
    let err = store.save(&mut bad, "a", "b", "c").unwrap_err();
    assert!(matches!(err, StorageError::Serialize { .. }));
}

#[test]
fn hidden_file_ids_are_refused_so_listing_sees_every_record() {
    let (_dir, store) = store();
    let mut hidden = node(".x", None);
    let err = store.save(&mut hidden, "a", "b", "c").unwrap_err();
    assert!(matches!(err, StorageError::Serialize { .. }));
    assert!(!store.exists(".x"));

    store.save(&mut node("x", None), "a", "b", "c").unwrap();
    assert_eq!(store.list().unwrap(), vec![TraceId::from("x")]);
}

#[test]
fn malformed_record_is_corrupt() {
    let (_dir, store) = store();
    let path = store.layout().node_path("n1");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "trace_id: [unterminated").unwrap();

    let err = store.load("n1").unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
}

#[test]
fn records_written_with_literal_null_parent_load_as_root() {
    let (_dir, store) = store();
    let path = store.layout().node_path("legacy");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        "trace_id: legacy\nparent: \"null\"\noperation:\n  op_class: filtering\n  method: min_count\n",
    )
    .unwrap();

    let loaded = store.load("legacy").unwrap();
    assert!(loaded.is_root());
    assert_eq!(loaded.operation.op_class, "filtering");
}

#[test]
fn list_and_exists_reflect_saved_nodes() {
    let (_dir, store) = store();
    assert!(store.list().unwrap().is_empty());

    store.save(&mut node("b", None), "1", "2", "x").unwrap();
    store.save(&mut node("a", Some("b")), "2", "3", "x").unwrap();

    assert_eq!(
        store.list().unwrap(),
        vec![TraceId::from("a"), TraceId::from("b")]
    );
    assert!(store.exists("a"));
    assert!(!store.exists("c"));
}

#[test]
fn custom_layout_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        state_dir: ".prov".into(),
        node_extension: "yml".into(),
        lock_index: false,
        ..Default::default()
    };
    let store = NodeStore::new(ProjectLayout::new(dir.path(), &config));
    store.save(&mut node("n1", None), "h1", "h1", "x").unwrap();

    assert!(dir.path().join(".prov/nodes/n1.yml").is_file());
    assert!(dir.path().join(".prov/index.json").is_file());
    assert!(!dir.path().join(".prov/.lock").exists());
}
