//! HS256 token verification.
//! Used by: handlers::data, state.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::Value;

use crate::error::VerificationError;
use crate::token::claims::ClaimSet;
use crate::token::secret::Secret;
use crate::token::ALGORITHM;

#[derive(Deserialize)]
struct DeclaredHeader {
    alg: String,
}

pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &Secret) -> Self {
        // Time claims are checked against the caller's clock, not the library's.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        Self { key: secret.decoding_key(), validation }
    }

    /// Returns the embedded data if `token` is well-formed, signed with our
    /// secret under HS256, and `now` lies inside its validity window.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Value, VerificationError> {
        let declared = parse_structure(token)?;
        match declared.alg.parse::<Algorithm>() {
            Ok(alg) if alg == ALGORITHM => {}
            _ => return Err(VerificationError::BadSignature),
        }

        let claims = decode::<ClaimSet>(token, &self.key, &self.validation)
            .map_err(classify)?
            .claims;
        claims.check_window(now)?;
        Ok(claims.data)
    }
}

fn parse_structure(token: &str) -> Result<DeclaredHeader, VerificationError> {
    let mut segments = token.split('.');
    let (header, payload) = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(header), Some(payload), Some(_signature), None) => (header, payload),
        _ => return Err(VerificationError::Malformed("expected three segments".into())),
    };

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|e| VerificationError::Malformed(format!("header: {e}")))?;
    let declared: DeclaredHeader = serde_json::from_slice(&header_bytes)
        .map_err(|e| VerificationError::Malformed(format!("header: {e}")))?;
    URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| VerificationError::Malformed(format!("payload: {e}")))?;
    Ok(declared)
}

fn classify(err: jsonwebtoken::errors::Error) -> VerificationError {
    match err.kind() {
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::InvalidKeyFormat => VerificationError::BadSignature,
        ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => VerificationError::Expired,
        _ => VerificationError::Malformed(err.to_string()),
    }
}
