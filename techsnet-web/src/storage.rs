use gloo_storage::{LocalStorage, Storage};
use shared::session::KeyValueStore;

/// [`KeyValueStore`] over the browser's `localStorage`.
///
/// Values are written as raw strings rather than through gloo's JSON
/// encoding so that keys written by earlier versions of the portal stay
/// readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            log::warn!("could not write {key} to local storage: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::UserProfile;
    use shared::session::{TokenStore, keys};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn round_trips_raw_strings() {
        let storage = BrowserStorage;
        storage.set("techsnet-test", "plain value");
        assert_eq!(storage.get("techsnet-test").as_deref(), Some("plain value"));
        storage.remove("techsnet-test");
        assert_eq!(storage.get("techsnet-test"), None);
    }

    #[wasm_bindgen_test]
    fn token_store_clears_legacy_keys() {
        let storage = BrowserStorage;
        storage.set("userEmail", "a@b.com");
        let store = TokenStore::new(storage);
        store.save("h.p.s", &UserProfile::new("a@b.com", None));
        store.clear();
        assert_eq!(storage.get(keys::TOKEN), None);
        assert_eq!(storage.get(keys::PROFILE), None);
        assert_eq!(storage.get("userEmail"), None);
    }
}
