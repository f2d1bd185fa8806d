#![allow(clippy::unwrap_used, clippy::expect_used)]

use tracing::Level;
use tutordesk_core::errors::{ExError, ExErrorKind, TutorError};
use tutordesk_core::logging_facility::test_capture::init_test_capture;
use tutordesk_core::model::PersonKind;
use tutordesk_core::{log_op_end, log_op_error, log_op_start};
use tutordesk_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE,
};

#[test]
fn test_log_op_start_carries_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, login = "ann");

    let starts = capture.find(op_name, EVENT_START);
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].field("login"), Some("ann"));
    assert!(starts[0]
        .component
        .as_deref()
        .unwrap()
        .contains("logging_facility_tests"));
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let ends = capture.find(op_name, EVENT_END);
    assert_eq!(ends.len(), 1, "Should have exactly one end event");
    assert_eq!(ends[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_client_error_logged_at_warn() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = TutorError::PersonNotFound {
        kind: PersonKind::Parent,
        id: 9,
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let errors = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(errors.len(), 1, "Should have exactly one error event");
    assert_eq!(errors[0].level, Level::WARN);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
}

#[test]
fn test_server_error_logged_at_error_with_message() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Persistence).with_message("disk I/O error");
    log_op_error!(op_name, err, duration_ms = 1);

    let errors = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].level, Level::ERROR);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_PERSISTENCE"));
    assert_eq!(errors[0].field("err_message"), Some("disk I/O error"));
}
