use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserProfile;

/// Why a token was refused.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("expected 3 dot-separated segments, found {0}")]
    Segments(usize),

    #[error("token payload is not valid base64")]
    Encoding,

    #[error("token payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("token expired at {exp} (now {now})")]
    Expired { exp: f64, now: i64 },
}

/// The readable middle segment of a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Expiry in seconds since the Unix epoch. NumericDate allows fractions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
}

/// `true` once `exp` is at or before `now` (both in epoch seconds).
pub(crate) fn expired(exp: f64, now: i64) -> bool {
    // Epoch seconds fit an f64 mantissa for any realistic date.
    #[allow(clippy::cast_precision_loss)]
    let now = now as f64;
    exp <= now
}

impl TokenClaims {
    /// Fails with [`TokenError::Expired`] once `exp` is at or before `now`.
    /// Tokens without `exp` never expire client-side.
    pub fn ensure_fresh(&self, now: i64) -> Result<(), TokenError> {
        match self.exp {
            Some(exp) if expired(exp, now) => Err(TokenError::Expired { exp, now }),
            _ => Ok(()),
        }
    }

    /// The profile carried by the token.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            picture: self.picture.clone(),
            subscription: None,
        }
    }
}

/// Splits `token` into its three segments and returns the decoded payload bytes.
pub(crate) fn payload_bytes(token: &str) -> Result<Vec<u8>, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Segments(segments.len()));
    }
    decode_segment(segments[1])
}

/// Decodes a base64url segment, tolerating padding and the standard alphabet.
fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|_| TokenError::Encoding)
}

/// Decodes the claims of `token` without verifying its signature.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not three segments, the payload
/// is not base64url, or it does not decode into [`TokenClaims`].
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let bytes = payload_bytes(token)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds an unsigned token around `payload`.
    pub(crate) fn token_with(payload: &str) -> String {
        format!("header.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn decodes_known_token() {
        let claims = decode_claims("header.eyJlbWFpbCI6ImFAYi5jb20ifQ.sig").unwrap();
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.name, None);
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn accepts_padded_standard_alphabet() {
        // `{"email":"a@b.com"}` encoded with padding.
        let claims = decode_claims("h.eyJlbWFpbCI6ImFAYi5jb20ifQ==.s").unwrap();
        assert_eq!(claims.email, "a@b.com");
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(decode_claims("a.b"), Err(TokenError::Segments(2))));
        assert!(matches!(
            decode_claims("a.b.c.d"),
            Err(TokenError::Segments(4))
        ));
        assert!(matches!(decode_claims(""), Err(TokenError::Segments(1))));
    }

    #[test]
    fn rejects_bad_base64() {
        assert!(matches!(
            decode_claims("a.!!!.c"),
            Err(TokenError::Encoding)
        ));
    }

    #[test]
    fn rejects_non_json_payload() {
        let token = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(decode_claims(&token), Err(TokenError::Payload(_))));
    }

    #[test]
    fn missing_email_is_a_payload_error() {
        let token = token_with(r#"{"name":"Ada"}"#);
        assert!(matches!(decode_claims(&token), Err(TokenError::Payload(_))));
    }

    #[test]
    fn expiry_boundaries() {
        let claims = decode_claims(&token_with(r#"{"email":"a@b.com","exp":100}"#)).unwrap();
        assert_eq!(claims.exp, Some(100.0));
        assert!(claims.ensure_fresh(99).is_ok());
        assert!(matches!(
            claims.ensure_fresh(100),
            Err(TokenError::Expired { now: 100, .. })
        ));
        assert!(claims.ensure_fresh(101).is_err());
    }

    #[test]
    fn fractional_exp_decodes() {
        let claims =
            decode_claims(&token_with(r#"{"email":"a@b.com","exp":100.5}"#)).unwrap();
        assert_eq!(claims.exp, Some(100.5));
        assert!(claims.ensure_fresh(100).is_ok());
        assert!(claims.ensure_fresh(101).is_err());
    }

    #[test]
    fn profile_carries_name_and_email() {
        let claims =
            decode_claims(&token_with(r#"{"email":"a@b.com","name":"Ada"}"#)).unwrap();
        let profile = claims.profile();
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.picture, None);
        assert_eq!(profile.subscription, None);
    }
}
