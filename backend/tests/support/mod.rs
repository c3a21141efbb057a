//! Shared helpers for HTTP integration tests.

use actix_web::dev::ServiceResponse;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test::{self, TestRequest};
use anime_backend::test_support::{FIXTURE_PASSWORD, basic_auth_header};
use serde_json::Value;

/// Attach Basic credentials for `username` with the fixture password.
pub fn signed_in(request: TestRequest, username: &str) -> TestRequest {
    request.insert_header((AUTHORIZATION, basic_auth_header(username, FIXTURE_PASSWORD)))
}

/// Read the response body as JSON.
pub async fn body_json(response: ServiceResponse) -> Value {
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}
