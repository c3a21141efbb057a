//! Regression coverage for domain error constructors.

use super::*;
use rstest::rstest;

#[rstest]
#[case(Error::not_found("missing"), ErrorCode::NotFound, "not_found")]
#[case(Error::invalid_request("bad json"), ErrorCode::InvalidRequest, "invalid_request")]
#[case(Error::unauthorized("who"), ErrorCode::Unauthorized, "unauthorized")]
#[case(Error::forbidden("nope"), ErrorCode::Forbidden, "forbidden")]
#[case(Error::service_unavailable("db down"), ErrorCode::ServiceUnavailable, "service_unavailable")]
#[case(Error::internal("boom"), ErrorCode::InternalError, "internal_error")]
fn constructors_set_code(
    #[case] error: Error,
    #[case] expected: ErrorCode,
    #[case] wire_name: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), wire_name);
    assert!(error.violations().is_empty());
}

#[rstest]
fn validation_keeps_violation_order() {
    let err = Error::validation(vec![
        FieldViolation::new("id", "The anime id cannot be null"),
        FieldViolation::new("name", "The anime name cannot be empty"),
    ]);

    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    assert_eq!(err.message(), VALIDATION_MESSAGE);
    let fields: Vec<&str> = err.violations().iter().map(FieldViolation::field).collect();
    assert_eq!(fields, ["id", "name"]);
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::not_found("Anime not Found").to_string(), "Anime not Found");
}
