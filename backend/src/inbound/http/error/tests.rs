//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn internal_error_case(expected_trace_id: String) -> Error {
    Error::internal("lock poisoned")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"secret": "x"}))
}

#[rstest]
#[case(Error::invalid_argument("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::duplicate_key("taken"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::rate_limited("slow down"), StatusCode::TOO_MANY_REQUESTS)]
#[case(Error::service_unavailable("starting"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn envelope_from(response: HttpResponse) -> ErrorEnvelope {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("envelope deserialises")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error_case: Error, expected_trace_id: String) {
    let response = ResponseError::error_response(&internal_error_case);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace header is set")
        .to_str()
        .expect("trace header is ascii")
        .to_owned();
    assert_eq!(header, expected_trace_id);

    let envelope = envelope_from(response).await;

    assert!(!envelope.success);
    assert_eq!(envelope.error, REDACTED_MESSAGE);
    assert_eq!(envelope.code, ErrorCode::InternalError);
    assert_eq!(envelope.trace_id.as_deref(), Some(TRACE_ID));
    assert!(envelope.details.is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_argument("Base price must be greater than 0")
        .with_details(json!({"field": "basePrice"}));

    let response = ResponseError::error_response(&error);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    let envelope = envelope_from(response).await;

    assert_eq!(envelope.error, "Base price must be greater than 0");
    assert_eq!(envelope.code, ErrorCode::InvalidArgument);
    assert_eq!(envelope.trace_id, None);
    assert_eq!(envelope.details, Some(json!({"field": "basePrice"})));
}

#[rstest]
fn envelope_serialises_wire_shape() {
    let error = Error::not_found("Room not found");
    let value =
        serde_json::to_value(ErrorEnvelope::from_error(&error, false)).expect("serialises");
    assert_eq!(
        value,
        json!({"success": false, "error": "Room not found", "code": "not_found"})
    );
}

async fn failing_handler() -> ApiResult<HttpResponse> {
    Err(Error::internal("lock poisoned"))
}

#[rstest]
#[case(true, "lock poisoned")]
#[case(false, REDACTED_MESSAGE)]
#[actix_web::test]
async fn exposure_middleware_controls_internal_messages(
    #[case] expose: bool,
    #[case] expected: &str,
) {
    let app = actix_test::init_service(
        App::new()
            .wrap(internal_error_exposure(expose))
            .route("/", web::get().to(failing_handler)),
    )
    .await;

    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
            .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let envelope: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(envelope.error, expected);
}

#[rstest]
#[actix_web::test]
async fn extractor_failures_become_invalid_argument() {
    let req = actix_test::TestRequest::default().to_http_request();
    let err = extractor_error("expected value at line 1", &req);
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let envelope = envelope_from(response).await;
    assert_eq!(envelope.code, ErrorCode::InvalidArgument);
    assert_eq!(envelope.error, "expected value at line 1");
}
