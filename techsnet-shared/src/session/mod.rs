//! # Session
//!
//! Client-side handling of the bearer token issued by the backend.
//!
//! The token is never trusted for authorization here: its payload is decoded
//! without checking the signature, only to reject tokens that are malformed
//! or already expired and to seed a profile after the OAuth return leg. Every
//! privileged request is still authorized by the backend.

pub(crate) mod claims;
mod lifecycle;
mod store;
mod validator;

pub use claims::{TokenClaims, TokenError, decode_claims};
pub use lifecycle::{AuthState, Session, Verification};
pub use store::{KeyValueStore, MemoryStore, TokenStore, keys};
pub use validator::{is_valid, is_valid_at, now_secs};
