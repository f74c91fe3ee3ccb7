//! Helpers wiring crate services to the mock API of a [`TestSetup`].

use std::sync::Arc;

use havasi::{
    api::ApiClient,
    auth::SessionManager,
    storage::{KeyValueStore, MemoryStore, TokenService, UserService},
    store::ProfileStore,
};
use havasi_test_utils::TestSetup;
use url::Url;

/// Extension trait for TestSetup to build clients against its mock server
pub trait TestSetupExt {
    /// API client with empty in-memory storage.
    fn api_client(&self) -> Arc<ApiClient>;

    /// API client whose storage already holds `token` and, if given, `user_id`.
    fn api_client_with_session(&self, token: &str, user_id: Option<&str>) -> Arc<ApiClient>;

    /// Session manager over a fresh API client with empty storage.
    fn session_manager(&self) -> Arc<SessionManager>;
}

impl TestSetupExt for TestSetup {
    fn api_client(&self) -> Arc<ApiClient> {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let base_url = Url::parse(&self.url()).unwrap();

        Arc::new(ApiClient::new(
            base_url,
            TokenService::new(store.clone()),
            UserService::new(store),
        ))
    }

    fn api_client_with_session(&self, token: &str, user_id: Option<&str>) -> Arc<ApiClient> {
        let api = self.api_client();
        api.tokens().set(token).unwrap();
        if let Some(user_id) = user_id {
            api.users().set(user_id).unwrap();
        }

        api
    }

    fn session_manager(&self) -> Arc<SessionManager> {
        SessionManager::new(self.api_client(), ProfileStore::new())
    }
}
