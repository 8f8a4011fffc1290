//! Bearer token redemption endpoint: returns the data embedded at issuance.
//! Used by: server.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;

use crate::error::{Error, Result};
use crate::response::json_response;
use crate::state::AppState;

/// The first word after `Bearer `. An empty result is left for the verifier
/// to reject as malformed.
fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(Error::MissingCredential)?;
    let rest = value.strip_prefix("Bearer ").ok_or(Error::MissingCredential)?;
    Ok(rest.split_whitespace().next().unwrap_or_default())
}

pub async fn show(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let token = bearer_token(&headers).inspect_err(|e| {
        tracing::warn!(reason = %e, "credential rejected");
    })?;

    let data = state
        .verifier
        .verify(token, state.clock.now())
        .inspect_err(|e| tracing::warn!(reason = %e, "token rejected"))?;

    tracing::info!("token accepted");
    Ok(json_response(StatusCode::OK, &data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn bearer_token_extracted() -> Result<()> {
        assert_eq!(bearer_token(&with_authorization("Bearer abc.def.ghi"))?, "abc.def.ghi");
        assert_eq!(bearer_token(&with_authorization("Bearer   abc extra"))?, "abc");
        Ok(())
    }

    #[test]
    fn empty_bearer_yields_empty_token() -> Result<()> {
        assert_eq!(bearer_token(&with_authorization("Bearer "))?, "");
        Ok(())
    }

    #[test]
    fn missing_header_rejected() {
        assert!(matches!(bearer_token(&HeaderMap::new()), Err(Error::MissingCredential)));
    }

    #[test]
    fn other_schemes_rejected() {
        assert!(matches!(
            bearer_token(&with_authorization("Basic dXNlcjpwYXNz")),
            Err(Error::MissingCredential)
        ));
        assert!(matches!(
            bearer_token(&with_authorization("bearer abc")),
            Err(Error::MissingCredential)
        ));
        assert!(matches!(
            bearer_token(&with_authorization("Bearer")),
            Err(Error::MissingCredential)
        ));
    }
}
