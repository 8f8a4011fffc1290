//! Startup configuration, read once from the environment.
//! Used by: main, state.

use crate::error::{Error, Result};
use crate::token::claims::{TokenWindow, DEFAULT_EXP_SECS, DEFAULT_NBF_SECS};
use crate::token::secret::Secret;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub secret: Secret,
    pub window: TokenWindow,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `JWT_SECRET` is required;
    /// `BIND_ADDR`, `TOKEN_NBF_SECS` and `TOKEN_EXP_SECS` fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret = lookup("JWT_SECRET")
            .ok_or_else(|| Error::Config("JWT_SECRET is not set".into()))
            .and_then(Secret::new)?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let nbf = parse_secs(&lookup, "TOKEN_NBF_SECS", DEFAULT_NBF_SECS)?;
        let exp = parse_secs(&lookup, "TOKEN_EXP_SECS", DEFAULT_EXP_SECS)?;
        let window = TokenWindow::new(nbf, exp)?;

        tracing::info!(bind_addr = %bind_addr, nbf_secs = nbf, exp_secs = exp, "configuration loaded");
        Ok(Self { bind_addr, secret, window })
    }
}

fn parse_secs(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: i64) -> Result<i64> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map(i64::from)
            .map_err(|e| Error::Config(format!("{key}={raw:?}: {e}"))),
    }
}
