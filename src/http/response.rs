//! JSON response writing.
//!
//! # Responsibilities
//! - Serialize any `Serialize` payload to indented JSON
//! - Emit exactly one response per call (200 JSON or 500 plain text)
//! - Hand serialization failures back to the caller for logging
//!
//! # Design Decisions
//! - Payload is serialized fully before any response is built, so a failure
//!   never leaves a half-written body behind
//! - The failure response carries no JSON content-type

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Content type set on every successful JSON response.
pub const APPLICATION_JSON: &str = "application/json";

/// Body of the 500 response emitted on serialization failure.
pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal server error";

/// Error returned by [`write_json`] when the payload cannot be encoded.
///
/// Converting it into a response yields the single 500 reply for the
/// request; the underlying encoder error stays available for logging.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("failed to serialize response payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        plain_text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_BODY)
    }
}

/// Serialize `payload` as pretty-printed JSON and build a 200 response.
pub fn write_json<T>(payload: &T) -> Result<Response, ResponseError>
where
    T: serde::Serialize + ?Sized,
{
    let body = serde_json::to_vec_pretty(payload)?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(APPLICATION_JSON),
    );
    Ok(response)
}

/// Build a plain-text error response with the given status.
pub(crate) fn plain_text(status: StatusCode, body: &'static str) -> Response {
    let mut response = (status, body).into_response();
    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}
