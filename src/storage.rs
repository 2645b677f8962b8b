//! `localStorage`-backed preference store.

use crate::core::prefs::{self, KeyValueStore};
use crate::dom;
use web_sys as web;

/// Wraps `window.localStorage`; degrades to a no-op store when storage is
/// unavailable (private browsing, storage disabled).
#[derive(Clone)]
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[storage] localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = &self.storage {
            _ = s.remove_item(key);
        }
    }
}

/// Clear every preference and reload so the whole app comes back up on
/// defaults.
pub fn reset_preferences(store: &LocalStore) {
    prefs::reset(store);
    log::info!("[storage] preferences reset");
    dom::reload_page();
}
