use serde::Deserialize;
use tracing::debug;

use super::claims::{expired, payload_bytes};

/// Only the expiry matters for validity; other claims may be absent.
#[derive(Deserialize)]
struct Expiry {
    #[serde(default)]
    exp: Option<f64>,
}

/// Current wall-clock time in seconds since the Unix epoch.
#[must_use]
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Advisory check that `token` looks like a live session at `now`.
///
/// Returns `false` when the token is not three dot-separated segments, when
/// the middle segment is not base64url-encoded JSON, or when an `exp` claim
/// is at or before `now`. A token without `exp` is accepted.
#[must_use]
pub fn is_valid_at(token: &str, now: i64) -> bool {
    let bytes = match payload_bytes(token) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(%err, "rejecting malformed session token");
            return false;
        }
    };
    let expiry: Expiry = match serde_json::from_slice(&bytes) {
        Ok(expiry) => expiry,
        Err(err) => {
            debug!(%err, "rejecting session token with unreadable payload");
            return false;
        }
    };
    match expiry.exp {
        Some(exp) if expired(exp, now) => {
            debug!(exp, now, "rejecting expired session token");
            false
        }
        _ => true,
    }
}

/// [`is_valid_at`] against the current time.
#[must_use]
pub fn is_valid(token: &str) -> bool {
    is_valid_at(token, now_secs())
}
