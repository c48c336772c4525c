//! Durable key-value storage.
//!
//! The credential holder only needs `get`/`set` on string keys, so it talks
//! to a [`KeyValueStore`] rather than to `localStorage` directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{AppError, AppResult};

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

/// Browser `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the page's local storage.
    ///
    /// Fails outside a browser, or when storage is disabled (some private
    /// browsing modes).
    pub fn local() -> AppResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Storage("no global window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;

        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("Failed to read '{}': {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("Failed to write '{}': {:?}", key, e)))
    }
}

/// Process-local store. Clones share the same entries, which lets tests
/// "restart" a holder over data written by a previous one.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open `localStorage`, falling back to an in-memory store so the page
/// still works (without persistence) when storage is blocked.
pub fn default_store() -> Box<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("⚠️  {} - token will not persist across sessions", e);
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_shares_entries_between_clones() {
        let store = MemoryStore::new();
        let other = store.clone();

        assert_eq!(store.get("auth_token").unwrap(), None);
        other.set("auth_token", "abc").unwrap();
        assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("abc"));

        store.set("auth_token", "def").unwrap();
        assert_eq!(other.get("auth_token").unwrap().as_deref(), Some("def"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let inner = MemoryStore::new();
        let boxed: Box<dyn KeyValueStore> = Box::new(inner.clone());

        boxed.set("k", "v").unwrap();
        assert_eq!(inner.get("k").unwrap().as_deref(), Some("v"));
    }
}
