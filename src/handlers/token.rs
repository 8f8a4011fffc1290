//! Token issuance endpoint.
//! Used by: server.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::response::json_response;
use crate::state::AppState;

fn require_json(headers: &HeaderMap) -> Result<()> {
    let essence = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::trim);
    match essence {
        Some(mime) if mime.eq_ignore_ascii_case("application/json") => Ok(()),
        _ => Err(Error::UnsupportedMediaType),
    }
}

pub async fn issue(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    require_json(&headers)?;
    let data: Value = serde_json::from_slice(&body).map_err(Error::UnprocessableBody)?;
    let token = state.issuer.issue(data, state.clock.now())?;
    tracing::info!("token issued");
    Ok(json_response(StatusCode::CREATED, &json!({ "token": token })))
}
