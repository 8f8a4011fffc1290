//! HTTP handler modules.
//! Used by: server.

pub mod data;
pub mod fallback;
pub mod token;
