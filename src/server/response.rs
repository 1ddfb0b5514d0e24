//! Response rendering and request body decoding.
//!
//! Errors render as their display text with a status code chosen by kind:
//! unknown users and categories are 404, rejected input is 400, and anything
//! internal is 500.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::error::{EnvelopeError, EnvelopeResult};

/// Status code an error is reported with
pub fn status_for(err: &EnvelopeError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}

/// Decode a request body as JSON
///
/// An empty body decodes to an empty object so every field reads as absent.
pub fn parse_body(body: &Bytes) -> EnvelopeResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_slice(body)?)
}
