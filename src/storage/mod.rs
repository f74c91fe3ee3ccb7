//! Persisted client-side state.
//!
//! A [`KeyValueStore`] is the durable string map that survives restarts: browser
//! `localStorage` on the web, a JSON file on native builds, memory in tests. The typed
//! services on top ([`TokenService`], [`UserService`], [`ThemeService`],
//! [`OAuthStateService`]) each own exactly one fixed key, so at most one value per
//! record is ever persisted.

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod oauth_state;
pub mod theme;
pub mod token;
pub mod user;

use std::{collections::HashMap, sync::Mutex};

pub use oauth_state::OAuthStateService;
pub use theme::{Theme, ThemeService};
pub use token::TokenService;
pub use user::UserService;

use crate::error::storage::StorageError;

/// Durable string key-value storage shared by the whole process
///
/// Implementations must tolerate concurrent callers; writes are last-writer-wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a key that is not present is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store, used by tests and as the fallback when nothing durable is available
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Poisoning only happens if a holder panicked; the map itself is still usable
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}
