//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{Error, FieldViolation};
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use chrono::TimeZone;
use rstest::{fixture, rstest};

#[fixture]
fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[rstest]
#[case(Error::not_found("Anime not Found"), StatusCode::BAD_REQUEST)]
#[case(Error::validation(vec![]), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_request("bad json"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("denied"), StatusCode::FORBIDDEN)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
fn not_found_payload_matches_contract(at: DateTime<Utc>) {
    let payload = ErrorPayload::from_error(&Error::not_found("Anime not Found"), at);

    assert_eq!(
        payload,
        ErrorPayload {
            title: "Bad Request Exception, Check the documentation".to_owned(),
            timestamp: "2024-05-01T12:00:00.000Z".to_owned(),
            status: 400,
            details: "Anime not Found".to_owned(),
            developer_message: "not_found".to_owned(),
            fields: None,
            fields_message: None,
        }
    );
}

#[rstest]
fn validation_payload_joins_fields_in_order(at: DateTime<Utc>) {
    let error = Error::validation(vec![
        FieldViolation::new("id", "The anime id cannot be null"),
        FieldViolation::new("name", "The anime name cannot be empty"),
    ]);

    let payload = ErrorPayload::from_error(&error, at);

    assert_eq!(payload.title, "Bad Request Exception, Invalid Fields");
    assert_eq!(payload.details, "Check the field(s) Error");
    assert_eq!(payload.developer_message, "validation_failed");
    assert_eq!(payload.fields.as_deref(), Some("id, name"));
    assert_eq!(
        payload.fields_message.as_deref(),
        Some("The anime id cannot be null, The anime name cannot be empty")
    );
}

#[rstest]
fn internal_details_are_redacted(at: DateTime<Utc>) {
    let payload = ErrorPayload::from_error(&Error::internal("password=hunter2"), at);
    assert_eq!(payload.details, "Internal server error");
    assert_eq!(payload.status, 500);
}

#[rstest]
fn service_unavailable_details_are_redacted(at: DateTime<Utc>) {
    let error = Error::service_unavailable(
        "anime repository unavailable: connection to postgres://admin:s3cret@db:5432 refused",
    );
    let payload = ErrorPayload::from_error(&error, at);
    assert_eq!(payload.details, "Internal server error");
    assert_eq!(payload.status, 503);
    assert_eq!(payload.developer_message, "service_unavailable");
}

#[rstest]
fn optional_fields_are_omitted_from_json(at: DateTime<Utc>) {
    let payload = ErrorPayload::from_error(&Error::forbidden("ROLE_ADMIN is required"), at);
    let value = serde_json::to_value(&payload).expect("serialise payload");
    assert!(value.get("fields").is_none());
    assert!(value.get("fieldsMessage").is_none());
    assert_eq!(value["developerMessage"], "forbidden");
}

#[rstest]
#[actix_web::test]
async fn unauthorized_response_carries_basic_challenge() {
    let response = ResponseError::error_response(&Error::unauthorized("invalid credentials"));

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok()),
        Some(BASIC_CHALLENGE)
    );
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    let payload: ErrorPayload = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(payload.title, "Unauthorized");
    assert_eq!(payload.status, 401);
}

#[rstest]
#[actix_web::test]
async fn other_responses_have_no_challenge() {
    let response = ResponseError::error_response(&Error::forbidden("nope"));
    assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
}
