//! Unified error types for authstamp.
//! Used by: config, token, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::response::json_response;

/// Why a presented token was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("invalid signature")]
    BadSignature,

    #[error("token outside validity window")]
    Expired,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported media type")]
    UnsupportedMediaType,

    #[error("unprocessable body: {0}")]
    UnprocessableBody(serde_json::Error),

    #[error("missing bearer credential")]
    MissingCredential,

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error("route not found")]
    RouteNotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::MissingCredential => StatusCode::FORBIDDEN,
            Error::Verification(VerificationError::Expired) => StatusCode::UNAUTHORIZED,
            Error::Verification(_) => StatusCode::FORBIDDEN,
            Error::RouteNotFound => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Signing(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        // Only the reason phrase goes out; the detailed cause stays in the logs.
        let reason = status.canonical_reason().unwrap_or("Error");
        json_response(status, &json!({ "error": reason }))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed() -> Error {
        VerificationError::Malformed("bad".into()).into()
    }

    #[test]
    fn expired_returns_401() {
        let response = Error::from(VerificationError::Expired).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bad_signature_returns_403() {
        let response = Error::from(VerificationError::BadSignature).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn malformed_returns_403() {
        assert_eq!(malformed().into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_credential_returns_403() {
        let response = Error::MissingCredential.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn request_shape_errors_map_to_4xx() {
        assert_eq!(Error::UnsupportedMediaType.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::UnprocessableBody(parse_err).status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(Error::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(Error::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn config_error_is_internal() {
        assert_eq!(Error::Config("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            Error::from(VerificationError::Expired).to_string(),
            "token outside validity window"
        );
        assert_eq!(malformed().to_string(), "malformed token: bad");
        assert_eq!(Error::MissingCredential.to_string(), "missing bearer credential");
    }
}
