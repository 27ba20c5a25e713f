//! Checksum index persistence and overwrite semantics.

use traceseq_core::errors::StorageError;
use traceseq_core::types::TraceId;
use traceseq_storage::{ChecksumIndex, ProjectLayout};

fn layout() -> (tempfile::TempDir, ProjectLayout) {
    let dir = tempfile::tempdir().unwrap();
    let layout = ProjectLayout::with_defaults(dir.path());
    (dir, layout)
}

#[test]
fn missing_index_loads_empty() {
    let (_dir, layout) = layout();
    let index = ChecksumIndex::load(&layout).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.lookup("deadbeef"), None);
}

#[test]
fn record_twice_keeps_only_second_id() {
    let mut index = ChecksumIndex::new();
    assert_eq!(index.record("h1", TraceId::from("n1")), None);
    let displaced = index.record("h1", TraceId::from("n2"));

    assert_eq!(displaced, Some(TraceId::from("n1")));
    assert_eq!(index.lookup("h1"), Some(&TraceId::from("n2")));
    assert_eq!(index.len(), 1);
    assert!(index.entries_for(&TraceId::from("n1")).is_empty());
}

#[test]
fn save_creates_state_dir_and_survives_reload() {
    let (_dir, layout) = layout();
    let mut index = ChecksumIndex::new();
    index.record("h1", TraceId::from("n1"));
    index.record("h2", TraceId::from("n2"));
    index.save(&layout).unwrap();

    assert!(layout.index_path().is_file());
    let reloaded = ChecksumIndex::load(&layout).unwrap();
    assert_eq!(reloaded, index);
}

#[test]
fn persisted_document_is_a_flat_digest_map() {
    let (_dir, layout) = layout();
    let mut index = ChecksumIndex::new();
    index.record("h1", TraceId::from("n1"));
    index.save(&layout).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(layout.index_path()).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "h1": "n1" }));
}

#[test]
fn hand_written_index_is_readable() {
    let (_dir, layout) = layout();
    std::fs::create_dir_all(layout.state_dir()).unwrap();
    std::fs::write(layout.index_path(), r#"{"abc": "n7", "def": "n8"}"#).unwrap();

    let index = ChecksumIndex::load(&layout).unwrap();
    assert_eq!(index.lookup("abc").map(TraceId::as_str), Some("n7"));
    assert_eq!(index.lookup("def").map(TraceId::as_str), Some("n8"));
}

#[test]
fn truncated_index_is_reported_corrupt() {
    let (_dir, layout) = layout();
    std::fs::create_dir_all(layout.state_dir()).unwrap();
    std::fs::write(layout.index_path(), r#"{"abc": "n"#).unwrap();

    let err = ChecksumIndex::load(&layout).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
}

#[test]
fn entries_for_lists_every_owned_digest() {
    let mut index = ChecksumIndex::new();
    index.record("in", TraceId::from("n1"));
    index.record("out", TraceId::from("n1"));
    index.record("other", TraceId::from("n2"));

    assert_eq!(index.entries_for(&TraceId::from("n1")), vec!["in", "out"]);
    assert_eq!(index.iter().count(), 3);
}
