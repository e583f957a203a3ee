#![allow(clippy::unwrap_used, clippy::expect_used)]

use todo_core::errors::{RecordError, TodoError, TodoErrorKind};
use todo_core::logging_facility::init_test_capture;
use todo_core::{log_op_end, log_op_error, log_op_start};
use todo_core_types::schema::{event, field};
use tracing::Level;

#[test]
fn test_start_carries_component_and_extra_fields() {
    let capture = init_test_capture();
    let op = "logging_start_fields";

    log_op_start!(op, todo_id = 3u64);

    let start = capture.find(op, event::START).expect("start event");
    assert_eq!(start.level, Level::INFO);
    assert_eq!(start.field(field::TODO_ID), Some("3"));
    assert!(start
        .field(field::COMPONENT)
        .is_some_and(|c| c.starts_with("logging_facility_tests")));
}

#[test]
fn test_end_records_duration() {
    let capture = init_test_capture();
    let op = "logging_end_duration";

    log_op_end!(op, duration_ms = 42);

    let events = capture.for_op(op);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event(), Some(event::END));
    assert_eq!(events[0].field(field::DURATION_MS), Some("42"));
}

#[test]
fn test_not_found_logs_at_warn_without_message() {
    let capture = init_test_capture();
    let op = "logging_not_found";

    log_op_error!(op, RecordError::TodoNotFound { id: 1 }, duration_ms = 10);

    let logged = capture.find(op, event::END_ERROR).expect("error event");
    assert_eq!(logged.level, Level::WARN);
    assert_eq!(logged.field(field::ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(logged.field(field::ERR_KIND), Some("NotFound"));
    assert_eq!(logged.field(field::ERR_MESSAGE), None);
}

#[test]
fn test_storage_failure_logs_at_error() {
    let capture = init_test_capture();
    let op = "logging_storage_failure";

    let err = TodoError::new(TodoErrorKind::Persistence).with_message("connection refused");
    log_op_error!(op, err, duration_ms = 5, todo_id = 9u64);

    let logged = capture.find(op, event::END_ERROR).expect("error event");
    assert_eq!(logged.level, Level::ERROR);
    assert_eq!(logged.field(field::ERR_CODE), Some("ERR_PERSISTENCE"));
    assert_eq!(logged.field(field::ERR_MESSAGE), Some("connection refused"));
    assert_eq!(logged.field(field::TODO_ID), Some("9"));
}

#[test]
fn test_one_start_and_one_end_per_operation() {
    let capture = init_test_capture();
    let op = "logging_boundaries";

    log_op_start!(op);
    log_op_end!(op, duration_ms = 1);

    let events: Vec<_> = capture
        .for_op(op)
        .iter()
        .map(|e| e.event().unwrap_or_default().to_string())
        .collect();
    assert_eq!(events, vec![event::START, event::END]);
}
