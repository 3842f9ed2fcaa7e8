use tracing::{debug, info};

use super::store::{KeyValueStore, TokenStore};
use super::validator::is_valid_at;
use crate::models::UserProfile;

/// What the rest of the application sees of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    /// `true` until storage has been consulted once.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn resolved(user: Option<UserProfile>) -> Self {
        Self {
            user,
            loading: false,
        }
    }
}

/// Outcome of asking the backend whether a token is still honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The backend accepted the token and returned the current profile.
    Confirmed(UserProfile),
    /// The backend refused the token (401/403).
    Rejected,
    /// No usable answer: network failure, server error or unreadable body.
    Unreachable,
}

/// Single owner of the token store and the in-memory [`AuthState`].
///
/// Every mutation goes through here so that a missing or invalid token always
/// means `user == None`.
#[derive(Debug)]
pub struct Session<S> {
    store: TokenStore<S>,
    state: AuthState,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(storage: S) -> Self {
        Self {
            store: TokenStore::new(storage),
            state: AuthState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Synchronously restores a stored session.
    ///
    /// When a token and profile are both stored and the token passes
    /// [`is_valid_at`], the profile becomes the current user and the token is
    /// returned so the caller can verify it in the background. Anything else
    /// leaves no user and clears leftovers from storage.
    pub fn restore(&mut self, now: i64) -> Option<String> {
        let token = self.store.read();
        let profile = self.store.read_profile();
        match (token, profile) {
            (Some(token), Some(profile)) if is_valid_at(&token, now) => {
                debug!(email = %profile.email, "restored stored session");
                self.state = AuthState::resolved(Some(profile));
                Some(token)
            }
            (None, None) => {
                self.state = AuthState::resolved(None);
                None
            }
            _ => {
                info!("discarding incomplete or expired stored session");
                self.store.clear();
                self.state = AuthState::resolved(None);
                None
            }
        }
    }

    /// Writes the session through to storage and makes `profile` current.
    pub fn login(&mut self, token: &str, profile: UserProfile) {
        self.store.save(token, &profile);
        self.state = AuthState::resolved(Some(profile));
    }

    /// Clears storage and the current user together.
    pub fn logout(&mut self) {
        self.store.clear();
        self.state = AuthState::resolved(None);
    }

    /// Bearer token for outbound requests.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.read()
    }

    /// Applies the backend's verdict on `token`.
    ///
    /// Ignored when `token` is no longer the stored token, since the session
    /// it describes has already been replaced or ended. Only an explicit
    /// rejection ends the session; an unreachable backend leaves it alone.
    /// Returns whether the state changed.
    pub fn apply_verification(&mut self, token: &str, verification: Verification) -> bool {
        if self.store.read().as_deref() != Some(token) {
            debug!("ignoring verification for a superseded token");
            return false;
        }
        match verification {
            Verification::Confirmed(profile) => {
                if self.state.user.as_ref() == Some(&profile) {
                    return false;
                }
                self.store.save_profile(&profile);
                self.state = AuthState::resolved(Some(profile));
                true
            }
            Verification::Rejected => {
                info!("backend rejected stored session, logging out");
                self.logout();
                true
            }
            Verification::Unreachable => {
                debug!("session verification unavailable, keeping session");
                false
            }
        }
    }
}
