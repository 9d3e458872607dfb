//! Durable bearer-token storage scoped to the browser origin.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the sole durable owner of the credential. `ApiClient` reads it
//! at dispatch time for every request; `Session` writes it on login/logout and
//! the inbound invalidation stage purges it on a rejected credential.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never surface as errors. An unavailable `localStorage`
//! reads as "no credential" and writes are logged and dropped.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

use std::fmt;
use std::sync::Mutex;

/// `localStorage` key holding the bearer token.
pub const STORAGE_KEY: &str = "token";

/// Opaque bearer token issued by the remote API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token, rejecting empty or whitespace-only values.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Empty`] when the token has no content.
    pub fn new(token: impl Into<String>) -> Result<Self, CredentialError> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("the server returned an empty token")]
    Empty,
}

/// Synchronous key-value storage for the single live credential.
pub trait CredentialStore: Send + Sync {
    fn save(&self, credential: &Credential);
    fn read(&self) -> Option<Credential>;
    /// Remove the credential. Clearing an empty store is a no-op.
    fn clear(&self);
}

/// `window.localStorage`-backed store. Server builds read nothing and
/// write nowhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        leptos::logging::warn!("localStorage unavailable; treating credential as absent");
    }
    storage
}

impl CredentialStore for LocalStorageStore {
    fn save(&self, credential: &Credential) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(STORAGE_KEY, credential.as_str()) {
                leptos::logging::warn!("credential save failed: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            _ = credential;
        }
    }

    fn read(&self) -> Option<Credential> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            match storage.get_item(STORAGE_KEY) {
                Ok(Some(raw)) => Credential::new(raw).ok(),
                Ok(None) => None,
                Err(err) => {
                    leptos::logging::warn!("credential read failed: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.remove_item(STORAGE_KEY) {
                leptos::logging::warn!("credential clear failed: {err:?}");
            }
        }
    }
}

/// Process-local store. Backs native tests and any host without a browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Credential>>,
}

impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Credential::new(token).ok()) }
    }
}

impl CredentialStore for MemoryStore {
    fn save(&self, credential: &Credential) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(credential.clone());
        }
    }

    fn read(&self) -> Option<Credential> {
        self.slot.lock().map_or(None, |slot| slot.clone())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
