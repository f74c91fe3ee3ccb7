use mockito::{Mock, Server, ServerGuard};

use crate::error::TestError;

/// Mock API server plus the endpoints registered on it
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestSetup {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock API, e.g. `http://127.0.0.1:1234`
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Iterates through all mocks registered with the setup and verifies each was
    /// called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock was not called as expected.
    pub async fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}
