//! Return leg of the third-party sign-in flow.
//!
//! The backend finishes the OAuth exchange and redirects the browser to
//! `/auth-success?token=<bearer>`. [`resolve`] turns that query string into a
//! single terminal [`OAuthOutcome`]; every outcome names where the browser
//! goes next, so the handling view can never be left waiting.

use tracing::{info, warn};

use crate::models::UserProfile;
use crate::session::{TokenError, decode_claims};

/// Query parameter carrying the token.
pub const TOKEN_PARAM: &str = "token";

/// Where the browser is sent once the return leg has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The public login entry, `/`.
    PublicEntry,
    /// The authenticated home, `/home`.
    Home,
}

/// Terminal result of handling `/auth-success`.
#[derive(Debug)]
pub enum OAuthOutcome {
    /// No token in the URL.
    MissingToken,
    /// The token was malformed or already expired.
    Rejected(TokenError),
    /// The token decoded; log in with it.
    Accepted { token: String, profile: UserProfile },
}

impl OAuthOutcome {
    #[must_use]
    pub fn redirect(&self) -> RedirectTarget {
        match self {
            Self::Accepted { .. } => RedirectTarget::Home,
            Self::MissingToken | Self::Rejected(_) => RedirectTarget::PublicEntry,
        }
    }

    /// Whether the user should be told sign-in failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Extracts a non-empty `token` parameter from a URL query string, with or
/// without the leading `?`.
#[must_use]
pub fn token_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolves the OAuth return leg at time `now` (epoch seconds).
#[must_use]
pub fn resolve(query: &str, now: i64) -> OAuthOutcome {
    let Some(token) = token_from_query(query) else {
        info!("auth-success reached without a token");
        return OAuthOutcome::MissingToken;
    };
    let claims = match decode_claims(&token) {
        Ok(claims) => claims,
        Err(err) => {
            warn!(%err, "rejecting token from OAuth redirect");
            return OAuthOutcome::Rejected(err);
        }
    };
    if let Err(err) = claims.ensure_fresh(now) {
        warn!(%err, "rejecting token from OAuth redirect");
        return OAuthOutcome::Rejected(err);
    }
    let profile = claims.profile();
    OAuthOutcome::Accepted { token, profile }
}
