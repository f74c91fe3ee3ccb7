use std::sync::Arc;

use crate::{error::storage::StorageError, storage::KeyValueStore};

pub const OAUTH_STATE_KEY: &str = "oauth_state";

/// CSRF state of the Google login that is currently in flight
///
/// Written right before redirecting to the provider and consumed when the provider
/// redirects back, so a callback can only be accepted once.
#[derive(Clone)]
pub struct OAuthStateService {
    store: Arc<dyn KeyValueStore>,
}

impl OAuthStateService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn insert(&self, state: &str) -> Result<(), StorageError> {
        self.store.set(OAUTH_STATE_KEY, state)
    }

    /// Returns the pending state and clears it.
    pub fn take(&self) -> Result<Option<String>, StorageError> {
        let state = self.store.get(OAUTH_STATE_KEY)?;
        if state.is_some() {
            self.store.remove(OAUTH_STATE_KEY)?;
        }

        Ok(state)
    }
}
