//! Durable session storage: the token and profile snapshot pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly two `localStorage` keys back the client session. The pair is
//! always written and cleared together; a read that finds only one half, or
//! an unparseable profile, counts as unauthenticated. The `SessionStore`
//! trait exists so the session manager can be exercised without a browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::net::types::SessionUser;

/// Storage key for the opaque bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the JSON-serialized profile snapshot.
pub const USER_KEY: &str = "userData";

/// Thin durable string mapping. No TTL, no encryption.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed store. Inert on the server: reads yield `None`
/// and writes are dropped, matching hydrate-only storage access.
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserStore {
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
                let _ = storage.set_item(key, value);
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

/// Write the token and profile snapshot together.
pub fn persist_session(store: &impl SessionStore, token: &str, user: &SessionUser) {
    let Ok(raw) = serde_json::to_string(user) else {
        return;
    };
    store.set(TOKEN_KEY, token);
    store.set(USER_KEY, &raw);
}

/// Read the persisted pair. Returns `None` unless both halves are present
/// and the profile snapshot parses.
pub fn load_session(store: &impl SessionStore) -> Option<(String, SessionUser)> {
    let token = store.get(TOKEN_KEY)?;
    let raw = store.get(USER_KEY)?;
    let user = serde_json::from_str(&raw).ok()?;
    Some((token, user))
}

/// Remove both halves of the persisted pair.
pub fn clear_session(store: &impl SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[cfg(test)]
impl SessionStore for MemoryStore {
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
