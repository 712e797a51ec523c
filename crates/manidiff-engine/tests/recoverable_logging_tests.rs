//! Recoverable observations during a build are logged, not raised
//!
//! All tests in this binary share one capture, so each test names its inputs
//! (and manifests) uniquely and filters on them.

mod common;

use common::{manager_in, source, CONFIGMAP_CFG};
use manidiff_core::logging_facility::test_capture::init_test_capture;
use manidiff_core::schema::{
    FIELD_BUILD_ID, FIELD_DOCUMENTS, FIELD_DURATION_MS, FIELD_IGNORED, FIELD_LEAVES,
    FIELD_PATH_KEY, FIELD_SIDE,
};
use tempfile::TempDir;
use tracing::Level;

const LEFT_WITH_NOISE: &str = "apiVersion: apps/v1
kind: Deployment
metadata:
  name: noisy-web
---
---
kind: Service
metadata:
  name: orphan
";

#[test]
fn test_empty_document_is_a_warning_with_side_and_source() {
    let capture = init_test_capture();
    let temp_dir = TempDir::new().unwrap();
    let mut manager = manager_in(temp_dir.path());
    let left_name = "empty-doc-warning-left.yaml";

    manager
        .build(
            &source(left_name, LEFT_WITH_NOISE),
            &source("empty-doc-warning-right.yaml", CONFIGMAP_CFG),
        )
        .unwrap();

    let warnings: Vec<_> = capture
        .from_source(left_name)
        .into_iter()
        .filter(|e| e.op() == Some("decode") && e.level == Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field(FIELD_SIDE), Some("Left"));
    assert!(warnings[0]
        .message()
        .unwrap()
        .contains("An empty document has been included in empty-doc-warning-left.yaml"));
}

#[test]
fn test_stream_summary_counts_found_and_ignored() {
    let capture = init_test_capture();
    let temp_dir = TempDir::new().unwrap();
    let mut manager = manager_in(temp_dir.path());
    let left_name = "stream-summary-left.yaml";
    let right_name = "stream-summary-right.yaml";

    manager
        .build(&source(left_name, LEFT_WITH_NOISE), &source(right_name, CONFIGMAP_CFG))
        .unwrap();

    let left = capture.from_source(left_name);
    let summary = left
        .iter()
        .find(|e| e.op() == Some("decode") && e.level == Level::INFO)
        .expect("decode summary for left input");
    assert_eq!(
        summary.message(),
        Some("2 objects found, and 1 ignored in stream-summary-left.yaml")
    );
    assert_eq!(summary.field(FIELD_DOCUMENTS), Some("2"));
    assert_eq!(summary.field(FIELD_IGNORED), Some("1"));

    // After validation one document was indexed; one empty and one invalid were ignored
    let indexed = left
        .iter()
        .find(|e| e.op() == Some("index_stream"))
        .expect("index summary for left input");
    assert_eq!(indexed.field(FIELD_DOCUMENTS), Some("1"));
    assert_eq!(indexed.field(FIELD_IGNORED), Some("2"));

    let right = capture.from_source(right_name);
    assert!(right
        .iter()
        .all(|e| e.field(FIELD_SIDE) == Some("Right") && e.level != Level::WARN));
}

#[test]
fn test_invalid_manifest_is_a_warning_with_reason() {
    let capture = init_test_capture();
    let temp_dir = TempDir::new().unwrap();
    let mut manager = manager_in(temp_dir.path());
    let left_name = "invalid-manifest-left.yaml";

    manager
        .build(&source(left_name, LEFT_WITH_NOISE), &source("invalid-manifest-right.yaml", ""))
        .unwrap();

    let dropped: Vec<_> = capture
        .from_source(left_name)
        .into_iter()
        .filter(|e| e.op() == Some("validate"))
        .collect();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].level, Level::WARN);
    assert_eq!(dropped[0].field(FIELD_SIDE), Some("Left"));
    assert!(dropped[0].field("reason").unwrap().contains("apiVersion"));
    assert_eq!(manager.report().unwrap().left.invalid_dropped, 1);
}

#[test]
fn test_blank_input_logs_no_empty_document_warning() {
    let capture = init_test_capture();
    let temp_dir = TempDir::new().unwrap();
    let mut manager = manager_in(temp_dir.path());
    let right_name = "blank-input-right.yaml";

    manager
        .build(&source("blank-input-left.yaml", CONFIGMAP_CFG), &source(right_name, "\n"))
        .unwrap();

    let right = capture.from_source(right_name);
    assert!(right.iter().all(|e| e.level != Level::WARN));
    assert!(right
        .iter()
        .any(|e| e.message() == Some("0 objects found, and 0 ignored in blank-input-right.yaml")));
    assert_eq!(manager.report().unwrap().right.empty_ignored, 0);
}

#[test]
fn test_build_end_event_carries_build_id_and_leaves() {
    let capture = init_test_capture();
    let temp_dir = TempDir::new().unwrap();
    let mut manager = manager_in(temp_dir.path());

    manager
        .build(
            &source("build-end-left.yaml", LEFT_WITH_NOISE),
            &source("build-end-right.yaml", CONFIGMAP_CFG),
        )
        .unwrap();
    let build_id = manager.report().unwrap().build_id.to_string();

    let end = capture
        .matching(|e| {
            e.op() == Some("build_index")
                && e.event() == Some("end")
                && e.field(FIELD_BUILD_ID) == Some(build_id.as_str())
        })
        .pop()
        .expect("build end event");
    assert_eq!(end.field(FIELD_LEAVES), Some("2"));
    assert!(end.field(FIELD_DURATION_MS).is_some());

    let materialized = capture.matching(|e| {
        e.op() == Some("materialize")
            && e.field(FIELD_PATH_KEY) == Some("apps/Deployment/noisy-web")
    });
    assert!(!materialized.is_empty());
}
