//! JSON response envelope.
//! Used by: error, handlers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// Newline-terminated JSON body with the given status. `null` and `false`
/// are sent as an empty body.
pub fn json_response(status: StatusCode, body: &Value) -> Response {
    if matches!(body, Value::Null | Value::Bool(false)) {
        return status.into_response();
    }
    let mut text = body.to_string();
    text.push('\n');
    (status, [(header::CONTENT_TYPE, "application/json")], text).into_response()
}
