//! Shared application state.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::token::claims::TokenWindow;
use crate::token::secret::Secret;
use crate::token::sign::TokenIssuer;
use crate::token::verify::TokenVerifier;

pub struct AppStateInner {
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
    pub clock: Arc<dyn Clock>,
}

pub type AppState = Arc<AppStateInner>;

struct StateBuilder<'a> {
    secret: &'a Secret,
    window: TokenWindow,
    clock: Arc<dyn Clock>,
}

impl StateBuilder<'_> {
    fn build(self) -> AppState {
        Arc::new(AppStateInner {
            issuer: TokenIssuer::new(self.secret, self.window),
            verifier: TokenVerifier::new(self.secret),
            clock: self.clock,
        })
    }
}

pub fn build_state(config: &Config) -> AppState {
    StateBuilder {
        secret: &config.secret,
        window: config.window,
        clock: Arc::new(SystemClock),
    }
    .build()
}

#[cfg(test)]
pub fn build_test_state(secret: &Secret, clock: Arc<dyn Clock>) -> AppState {
    StateBuilder { secret, window: TokenWindow::default(), clock }.build()
}
