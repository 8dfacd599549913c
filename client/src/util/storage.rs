//! Persistent session storage.
//!
//! The auth token and user live in `localStorage` under the keys named in
//! [`AUTH_CONFIG`]. An absent or empty token means "not signed in"; storage
//! failures are treated the same way and never surface as errors.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::config::AUTH_CONFIG;
use crate::state::auth::AuthSession;

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Every operation is a no-op without `hydrate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    leptos::logging::warn!("localStorage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read the stored session, if any.
pub fn load_session(store: &impl KeyValueStore) -> Option<AuthSession> {
    let token = store.get(AUTH_CONFIG.storage.token)?;
    if token.trim().is_empty() {
        return None;
    }
    let user = store.get(AUTH_CONFIG.storage.user).filter(|u| !u.is_empty());
    Some(AuthSession { token, user })
}

pub fn save_session(store: &impl KeyValueStore, session: &AuthSession) {
    store.set(AUTH_CONFIG.storage.token, &session.token);
    match &session.user {
        Some(user) => store.set(AUTH_CONFIG.storage.user, user),
        None => store.remove(AUTH_CONFIG.storage.user),
    }
}

pub fn clear_session(store: &impl KeyValueStore) {
    store.remove(AUTH_CONFIG.storage.token);
    store.remove(AUTH_CONFIG.storage.user);
}
