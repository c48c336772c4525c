//! Bearer token holder backed by durable storage.

use crate::services::storage::KeyValueStore;
use crate::{AppResult, TOKEN_STORAGE_KEY};

/// Holds the active bearer token and persists it on save.
///
/// The token is opaque: no format check, no expiry, no refresh.
pub struct CredentialHolder<S> {
    store: S,
    key: String,
    token: String,
}

impl<S: KeyValueStore> CredentialHolder<S> {
    /// Load the token saved under [`TOKEN_STORAGE_KEY`], if any.
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, TOKEN_STORAGE_KEY)
    }

    /// Load the token saved under `key`, if any.
    ///
    /// A failed read is logged and treated as "no saved token".
    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let token = match store.get(&key) {
            Ok(Some(saved)) => {
                log::info!("🔑 Restored saved token ({} chars)", saved.len());
                saved
            }
            Ok(None) => String::new(),
            Err(e) => {
                log::warn!("⚠️  Could not read saved token: {}", e);
                String::new()
            }
        };

        Self { store, key, token }
    }

    /// Current token, possibly empty.
    pub fn get(&self) -> &str {
        &self.token
    }

    /// Persist `value` and make it the active token.
    ///
    /// The in-memory token only changes once the write succeeded.
    pub fn set(&mut self, value: impl Into<String>) -> AppResult<()> {
        let value = value.into();
        self.store.set(&self.key, &value)?;
        log::info!("🔑 Token saved ({} chars)", value.len());
        self.token = value;
        Ok(())
    }
}
