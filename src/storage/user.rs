use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{error::storage::StorageError, storage::KeyValueStore};

pub const USER_ID_KEY: &str = "user_id";

/// Persisted identifier of the logged-in user
///
/// Lets pages that do not hold the live profile (sent notification history) still
/// address per-user endpoints.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn KeyValueStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn get(&self) -> Option<String> {
        match self.store.get(USER_ID_KEY) {
            Ok(id) => id.filter(|id| !id.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read stored user ID: {}", e);
                None
            }
        }
    }

    pub fn set(&self, user_id: &str) -> Result<(), StorageError> {
        self.store.set(USER_ID_KEY, user_id)
    }

    pub fn remove(&self) -> Result<(), StorageError> {
        self.store.remove(USER_ID_KEY)
    }

    pub fn has(&self) -> bool {
        self.get().is_some()
    }
}
