//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock API before a
//! test runs. Endpoints are queued by the chained methods and registered on a fresh
//! mockito server during the final `build()` call.

use serde_json::Value;

use crate::{
    constant::TEST_ACCESS_TOKEN,
    error::TestError,
    fixtures::factory,
    TestSetup,
};

enum Endpoint {
    CurrentUser {
        token: String,
        user: Value,
        expected_requests: usize,
    },
    Error {
        method: String,
        path: String,
        status: usize,
        message: String,
        expected_requests: usize,
    },
    RealEstates {
        offset: usize,
        limit: usize,
        estates: Vec<Value>,
        expected_requests: usize,
    },
    Notifications {
        user_id: String,
        notifications: Vec<Value>,
        expected_requests: usize,
    },
}

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a
/// [`TestSetup`] whose mocks are verified by [`TestSetup::assert_mocks`].
#[derive(Default)]
pub struct TestBuilder {
    endpoints: Vec<Endpoint>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `GET /api/users/me` answering [`TEST_ACCESS_TOKEN`] with a user having `roles`.
    ///
    /// # Arguments
    /// - `user_id` - ID of the returned user
    /// - `roles` - Roles of the returned user
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_current_user_endpoint(
        mut self,
        user_id: &str,
        roles: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::CurrentUser {
            token: TEST_ACCESS_TOKEN.to_string(),
            user: factory::mock_user(user_id, roles),
            expected_requests,
        });
        self
    }

    /// Add `GET /api/users/me` answering 401 regardless of the token sent.
    pub fn with_expired_token_endpoint(self, expected_requests: usize) -> Self {
        self.with_error_endpoint("GET", "/api/users/me", 401, "Unauthorized", expected_requests)
    }

    /// Add an endpoint answering `status` with a JSON `message` body.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_error_endpoint(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Error {
            method: method.to_string(),
            path: path.to_string(),
            status,
            message: message.to_string(),
            expected_requests,
        });
        self
    }

    /// Add one page of `GET /api/real-estates` for [`TEST_ACCESS_TOKEN`].
    ///
    /// # Arguments
    /// - `offset` - Expected `offset` query value
    /// - `limit` - Expected `limit` query value, page size plus one
    /// - `count` - Number of listings to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_real_estates_endpoint(
        mut self,
        offset: usize,
        limit: usize,
        count: usize,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::RealEstates {
            offset,
            limit,
            estates: factory::mock_real_estates(count),
            expected_requests,
        });
        self
    }

    /// Add `GET /api/users/{userId}/notifications` for [`TEST_ACCESS_TOKEN`].
    pub fn with_notifications_endpoint(
        mut self,
        user_id: &str,
        notifications: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Notifications {
            user_id: user_id.to_string(),
            notifications,
            expected_requests,
        });
        self
    }

    /// Start the mock server and register every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Server with all endpoints registered
    /// - `Err(TestError)` - A fixture body could not be serialized
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for endpoint in self.endpoints {
            let mock = match endpoint {
                Endpoint::CurrentUser {
                    token,
                    user,
                    expected_requests,
                } => {
                    setup
                        .api()
                        .create_current_user_endpoint(&token, user, expected_requests)
                        .await?
                }
                Endpoint::Error {
                    method,
                    path,
                    status,
                    message,
                    expected_requests,
                } => {
                    setup
                        .api()
                        .create_error_endpoint(&method, &path, status, &message, expected_requests)
                        .await?
                }
                Endpoint::RealEstates {
                    offset,
                    limit,
                    estates,
                    expected_requests,
                } => {
                    setup
                        .api()
                        .create_real_estates_endpoint(
                            TEST_ACCESS_TOKEN,
                            offset,
                            limit,
                            estates,
                            expected_requests,
                        )
                        .await?
                }
                Endpoint::Notifications {
                    user_id,
                    notifications,
                    expected_requests,
                } => {
                    setup
                        .api()
                        .create_notifications_endpoint(
                            TEST_ACCESS_TOKEN,
                            &user_id,
                            notifications,
                            expected_requests,
                        )
                        .await?
                }
            };

            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
