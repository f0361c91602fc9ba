//! Durable session token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token survives reloads in `localStorage` under a single fixed key.
//! Only `AuthContext` owns a `SessionStore`; views never touch storage.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a browser that refuses `localStorage`
//! (private mode, quota) degrades to an in-tab session rather than failing
//! login. Outside the browser the storage backend is a no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Key/value persistence backing a [`SessionStore`].
pub trait TokenStorage: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist session token");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Process-local storage, shared by clones of the same `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// `get`/`set`/`clear` over the token key of a storage backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn TokenStorage>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("has_token", &self.get().is_some()).finish()
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn TokenStorage>) -> Self {
        Self { backend }
    }

    /// Store backed by `localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Store backed by a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Current token; an empty stored value counts as no session.
    pub fn get(&self) -> Option<String> {
        self.backend
            .read(TOKEN_STORAGE_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn set(&self, token: &str) {
        self.backend.write(TOKEN_STORAGE_KEY, token);
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_STORAGE_KEY);
    }
}
