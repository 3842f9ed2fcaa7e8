use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::models::UserProfile;

/// Fixed storage keys.
pub mod keys {
    /// Bearer token.
    pub const TOKEN: &str = "authToken";
    /// Serialized [`UserProfile`](crate::models::UserProfile).
    pub const PROFILE: &str = "user";
    /// Keys written by earlier versions of the portal, removed on logout.
    pub const LEGACY: [&str; 2] = ["token", "userEmail"];
}

/// Minimal string key-value storage, implemented by browser storage in the
/// web crate and by [`MemoryStore`] in tests.
///
/// Implementations swallow backend failures: a storage that cannot be read
/// behaves like an empty one.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`KeyValueStore`]. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Owner of the persisted bearer token and profile.
#[derive(Debug, Clone)]
pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persists `token` and `profile`, replacing whatever was stored before.
    pub fn save(&self, token: &str, profile: &UserProfile) {
        self.storage.set(keys::TOKEN, token);
        match serde_json::to_string(profile) {
            Ok(serialized) => self.storage.set(keys::PROFILE, &serialized),
            Err(err) => {
                warn!(%err, "could not serialize profile, dropping stale copy");
                self.storage.remove(keys::PROFILE);
            }
        }
    }

    /// Replaces only the stored profile, e.g. after the backend refreshed it.
    /// On a serialization failure the previous copy is kept, since it still
    /// belongs to the stored token.
    pub fn save_profile(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(serialized) => self.storage.set(keys::PROFILE, &serialized),
            Err(err) => warn!(%err, "could not serialize refreshed profile, keeping stored copy"),
        }
    }

    /// Removes the token, the profile and every legacy key. Idempotent.
    pub fn clear(&self) {
        self.storage.remove(keys::TOKEN);
        self.storage.remove(keys::PROFILE);
        for key in keys::LEGACY {
            self.storage.remove(key);
        }
    }

    /// The stored token, if any.
    #[must_use]
    pub fn read(&self) -> Option<String> {
        self.storage
            .get(keys::TOKEN)
            .filter(|token| !token.is_empty())
    }

    /// The stored profile. An unreadable profile counts as absent.
    #[must_use]
    pub fn read_profile(&self) -> Option<UserProfile> {
        let raw = self.storage.get(keys::PROFILE)?;
        serde_json::from_str(&raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new("a@b.com", Some("Ada".to_string()))
    }

    #[test]
    fn save_then_read() {
        let store = TokenStore::new(MemoryStore::new());
        store.save("t1", &profile());
        assert_eq!(store.read().as_deref(), Some("t1"));
        assert_eq!(store.read_profile(), Some(profile()));
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = TokenStore::new(MemoryStore::new());
        store.save("t1", &profile());
        let other = UserProfile::new("c@d.com", None);
        store.save("t2", &other);
        assert_eq!(store.read().as_deref(), Some("t2"));
        assert_eq!(store.read_profile(), Some(other));
    }

    #[test]
    fn save_profile_replaces_only_the_profile() {
        let store = TokenStore::new(MemoryStore::new());
        store.save("t1", &profile());
        let refreshed = UserProfile::new("a@b.com", Some("Ada Lovelace".to_string()));
        store.save_profile(&refreshed);
        assert_eq!(store.read().as_deref(), Some("t1"));
        assert_eq!(store.read_profile(), Some(refreshed));
    }

    #[test]
    fn clear_removes_everything_including_legacy_keys() {
        let memory = MemoryStore::new();
        memory.set("token", "old");
        memory.set("userEmail", "a@b.com");
        memory.set("unrelated", "kept");
        let store = TokenStore::new(memory.clone());
        store.save("t1", &profile());

        store.clear();
        assert_eq!(store.read(), None);
        assert_eq!(store.read_profile(), None);
        assert_eq!(memory.get("token"), None);
        assert_eq!(memory.get("userEmail"), None);
        assert_eq!(memory.len(), 1);

        store.clear();
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn reads_are_side_effect_free() {
        let memory = MemoryStore::new();
        let store = TokenStore::new(memory.clone());
        assert_eq!(store.read(), None);
        assert_eq!(store.read_profile(), None);
        assert!(memory.is_empty());
    }

    #[test]
    fn corrupt_profile_reads_as_absent() {
        let memory = MemoryStore::new();
        memory.set(keys::PROFILE, "{not json");
        let store = TokenStore::new(memory);
        assert_eq!(store.read_profile(), None);
    }

    #[test]
    fn empty_token_reads_as_absent() {
        let memory = MemoryStore::new();
        memory.set(keys::TOKEN, "");
        assert_eq!(TokenStore::new(memory).read(), None);
    }
}
