//! Thin seams over what differs between the browser and native builds.

use std::{sync::Arc, time::Duration};

#[cfg(not(target_arch = "wasm32"))]
use dioxus_logger::tracing;

use crate::{config::Config, storage::KeyValueStore};

/// Suspends the current task without blocking the event loop.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

/// Durable store for this platform.
///
/// Browser builds use `localStorage`. Native builds use the configured file, or the
/// platform data directory, and fall back to memory when neither is usable.
pub fn default_store(config: &Config) -> Arc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Arc::new(crate::storage::browser::BrowserStore::new())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use crate::storage::{file::FileStore, MemoryStore};

        let store = match &config.storage_path {
            Some(path) => Ok(FileStore::new(path)),
            None => FileStore::in_data_dir(),
        };

        match store {
            Ok(store) => {
                tracing::debug!(path = %store.path().display(), "Using file storage");
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!("Falling back to in-memory storage: {}", e);
                Arc::new(MemoryStore::new())
            }
        }
    }
}
