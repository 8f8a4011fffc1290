//! Token creation, signing, and verification.
//! Used by: handlers, state.

use jsonwebtoken::Algorithm;

pub mod claims;
pub mod secret;
pub mod sign;
pub mod verify;

/// The only algorithm tokens are signed and accepted with.
pub const ALGORITHM: Algorithm = Algorithm::HS256;
