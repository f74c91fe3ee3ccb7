use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{error::storage::StorageError, storage::KeyValueStore};

pub const TOKEN_KEY: &str = "access_token";

/// Persisted bearer token record
#[derive(Clone)]
pub struct TokenService {
    store: Arc<dyn KeyValueStore>,
}

impl TokenService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored token, `None` when absent or empty.
    ///
    /// A storage read failure is logged and treated as "no token" so that a broken
    /// store degrades to a logged-out session instead of an error page.
    pub fn get(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read stored access token: {}", e);
                None
            }
        }
    }

    pub fn set(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token)
    }

    pub fn remove(&self) -> Result<(), StorageError> {
        self.store.remove(TOKEN_KEY)
    }

    pub fn has(&self) -> bool {
        self.get().is_some()
    }
}
