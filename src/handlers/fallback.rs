//! Responses for requests that match no handler.
//! Used by: server.

use axum::http::{Method, Uri};

use crate::error::Error;

pub async fn not_found(method: Method, uri: Uri) -> Error {
    tracing::debug!(%method, path = %uri.path(), "no route");
    Error::RouteNotFound
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> Error {
    tracing::debug!(%method, path = %uri.path(), "method not allowed");
    Error::MethodNotAllowed
}
