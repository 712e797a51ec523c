#![allow(clippy::unwrap_used, clippy::expect_used)]

use manidiff_core::errors::{ExError, ExErrorKind};
use manidiff_core::logging_facility::test_capture::init_test_capture;
use manidiff_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_SIDE,
};
use manidiff_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, side = "Left");

    let events = capture.events();
    let start_event = events
        .iter()
        .find(|e| e.op() == Some(op_name) && e.event() == Some(EVENT_START))
        .expect("start event should be captured");

    assert_eq!(start_event.field(FIELD_SIDE), Some("Left"));
    assert!(start_event.component().is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op() == Some(op_name) && e.event() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ExError::new(ExErrorKind::Decode).with_message("bad yaml");
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| {
            e.op() == Some(op_name) && e.event() == Some(EVENT_END_ERROR)
        })
        .collect();

    assert_eq!(error_events.len(), 1);
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_DECODE"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("Decode"));
}
