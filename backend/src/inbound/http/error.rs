//! HTTP mapping for domain errors.
//!
//! Every failure leaving a handler, extractor or decoder is rendered through
//! [`ErrorPayload`] so clients see one JSON shape:
//!
//! ```json
//! {
//!   "title": "Bad Request Exception, Invalid Fields",
//!   "timestamp": "2024-05-01T12:00:00Z",
//!   "status": 400,
//!   "details": "Check the field(s) Error",
//!   "developerMessage": "validation_failed",
//!   "fields": "name",
//!   "fieldsMessage": "The anime name cannot be empty"
//! }
//! ```

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Value of the `WWW-Authenticate` header sent with every 401.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"animes\"";

const REDACTED_MESSAGE: &str = "Internal server error";
const FIELD_SEPARATOR: &str = ", ";

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Short summary of the failure category.
    #[schema(example = "Bad Request Exception, Check the documentation")]
    pub title: String,
    /// RFC 3339 UTC time the response was produced.
    #[schema(example = "2024-05-01T12:00:00Z")]
    pub timestamp: String,
    /// HTTP status code, repeated for clients that only see the body.
    #[schema(example = 400)]
    pub status: u16,
    /// Human-readable description.
    #[schema(example = "Anime not Found")]
    pub details: String,
    /// Stable machine-readable failure kind.
    #[schema(example = "not_found")]
    pub developer_message: String,
    /// Offending field names, joined with `", "`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "name")]
    pub fields: Option<String>,
    /// Messages for each offending field, in the same order as `fields`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "The anime name cannot be empty")]
    pub fields_message: Option<String>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound | ErrorCode::ValidationFailed | ErrorCode::InvalidRequest => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn title_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::NotFound => "Bad Request Exception, Check the documentation",
        ErrorCode::ValidationFailed => "Bad Request Exception, Invalid Fields",
        ErrorCode::InvalidRequest => "Bad Request Exception, Malformed Request",
        ErrorCode::Unauthorized => "Unauthorized",
        ErrorCode::Forbidden => "Forbidden",
        ErrorCode::ServiceUnavailable => "Service Unavailable",
        ErrorCode::InternalError => "Internal Server Error",
    }
}

fn join_violations<'a>(parts: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = parts.collect::<Vec<_>>().join(FIELD_SEPARATOR);
    (!joined.is_empty()).then_some(joined)
}

impl ErrorPayload {
    /// Render `error` as it would be sent at `timestamp`.
    ///
    /// Internal and unavailable-store messages are replaced with a generic
    /// one; they are logged in full instead.
    pub fn from_error(error: &Error, timestamp: DateTime<Utc>) -> Self {
        let code = error.code();
        let details = match code {
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable => REDACTED_MESSAGE.to_owned(),
            _ => error.message().to_owned(),
        };
        Self {
            title: title_for(code).to_owned(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: status_for(code).as_u16(),
            details,
            developer_message: code.as_str().to_owned(),
            fields: join_violations(error.violations().iter().map(|v| v.field())),
            fields_message: join_violations(error.violations().iter().map(|v| v.message())),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable => {
                error!(code = %self.code(), message = self.message(), "request failed");
            }
            ErrorCode::Unauthorized | ErrorCode::Forbidden => {
                warn!(code = %self.code(), message = self.message(), "request rejected");
            }
            _ => debug!(code = %self.code(), message = self.message(), "request rejected"),
        }

        let mut builder = HttpResponse::build(self.status_code());
        if self.code() == ErrorCode::Unauthorized {
            builder.insert_header((header::WWW_AUTHENTICATE, BASIC_CHALLENGE));
        }
        builder.json(ErrorPayload::from_error(self, Utc::now()))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}

fn malformed(kind: &str, detail: impl std::fmt::Display) -> actix_web::Error {
    debug!(kind, %detail, "malformed request");
    Error::invalid_request(format!("Malformed {kind}: {detail}")).into()
}

/// JSON body decoder that reports failures in the shared error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| malformed("request body", err))
}

/// Path decoder that reports failures in the shared error shape.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err: PathError, _req: &HttpRequest| malformed("path parameter", err))
}

/// Query-string decoder that reports failures in the shared error shape.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
            malformed("query parameter", err)
        })
}

#[cfg(test)]
mod tests;
