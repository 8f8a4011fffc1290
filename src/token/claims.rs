//! Claims carried inside a token, and the validity window they encode.
//! Used by: token::sign, token::verify, config.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result, VerificationError};

pub const DEFAULT_NBF_SECS: i64 = 2;
pub const DEFAULT_EXP_SECS: i64 = 5;

/// Offsets from the issue instant that bound a token's validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenWindow {
    not_before: Duration,
    expires_after: Duration,
}

impl TokenWindow {
    /// Fails unless `not_before_secs < expires_after_secs`, both non-negative.
    pub fn new(not_before_secs: i64, expires_after_secs: i64) -> Result<Self> {
        if not_before_secs < 0 || expires_after_secs < 0 {
            return Err(Error::Config("token window offsets must be non-negative".into()));
        }
        if not_before_secs >= expires_after_secs {
            return Err(Error::Config(format!(
                "not-before offset ({not_before_secs}s) must be less than expiry offset ({expires_after_secs}s)"
            )));
        }
        Ok(Self {
            not_before: Duration::seconds(not_before_secs),
            expires_after: Duration::seconds(expires_after_secs),
        })
    }

    pub fn not_before(&self) -> Duration {
        self.not_before
    }

    pub fn expires_after(&self) -> Duration {
        self.expires_after
    }
}

impl Default for TokenWindow {
    fn default() -> Self {
        Self {
            not_before: Duration::seconds(DEFAULT_NBF_SECS),
            expires_after: Duration::seconds(DEFAULT_EXP_SECS),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimSet {
    pub data: Value,
    #[serde(rename = "nbf")]
    pub not_before: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl ClaimSet {
    pub fn new(data: Value, now: DateTime<Utc>, window: TokenWindow) -> Self {
        Self {
            data,
            not_before: (now + window.not_before).timestamp(),
            expires_at: (now + window.expires_after).timestamp(),
        }
    }

    /// Accepts `now` in `[nbf, exp)`. Early and late both report `Expired`.
    pub fn check_window(&self, now: DateTime<Utc>) -> std::result::Result<(), VerificationError> {
        let now = now.timestamp();
        if now < self.not_before || now >= self.expires_at {
            return Err(VerificationError::Expired);
        }
        Ok(())
    }
}
