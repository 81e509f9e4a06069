//! Tests for domain error construction and trace capture.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_argument("bad"), ErrorCode::InvalidArgument)]
#[case(Error::duplicate_key("taken"), ErrorCode::DuplicateKey)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::rate_limited("slow down"), ErrorCode::RateLimited)]
#[case(Error::service_unavailable("starting"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::InvalidArgument, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn new_substitutes_generic_message_for_blank_input() {
    let error = Error::new(ErrorCode::NotFound, "");
    assert_eq!(error.message(), "not found");
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::internal("boom").try_with_trace_id(" ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn constructors_capture_scoped_trace_id(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("valid fixture uuid");
    let error = TraceId::scope(trace_id, async { Error::not_found("Room not found") }).await;
    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let error = Error::invalid_argument("Base price must be greater than 0");
    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(
        value,
        json!({ "code": "invalid_argument", "message": "Base price must be greater than 0" })
    );
}

#[rstest]
fn serialises_trace_id_and_details_when_present(expected_trace_id: String) {
    let error = Error::duplicate_key("Room number 101 already exists")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "number" }));
    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(value["traceId"], json!(expected_trace_id));
    assert_eq!(value["details"]["field"], json!("number"));
    assert_eq!(value["code"], json!("duplicate_key"));
}
