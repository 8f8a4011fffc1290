//! HS256 token issuance.
//! Used by: handlers::token, state.

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;

use crate::error::Result;
use crate::token::claims::{ClaimSet, TokenWindow};
use crate::token::secret::Secret;
use crate::token::ALGORITHM;

pub struct TokenIssuer {
    key: EncodingKey,
    window: TokenWindow,
}

impl TokenIssuer {
    pub fn new(secret: &Secret, window: TokenWindow) -> Self {
        Self { key: secret.encoding_key(), window }
    }

    /// Wraps `data` in a claim set valid for `[now + nbf, now + exp)` and signs it.
    pub fn issue(&self, data: Value, now: DateTime<Utc>) -> Result<String> {
        let claims = ClaimSet::new(data, now, self.window);
        let token = encode(&Header::new(ALGORITHM), &claims, &self.key)?;
        tracing::debug!(nbf = claims.not_before, exp = claims.expires_at, "token signed");
        Ok(token)
    }
}
