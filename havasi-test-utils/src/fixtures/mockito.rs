//! Havasi API mock endpoint creation utilities.
//!
//! Each method registers one endpoint on the mockito server and returns the
//! [`Mock`] so the test can verify it was called the expected number of times.
//! Authenticated endpoints only match requests carrying the given bearer token.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{error::TestError, fixtures::ApiFixtures};

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

impl<'a> ApiFixtures<'a> {
    /// Create a mock `GET /api/users/me` endpoint.
    ///
    /// # Arguments
    /// - `token` - Bearer token the request must carry
    /// - `user` - Body to return, see [`crate::fixtures::factory::mock_user`]
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Ok(Mock)` - The created mock endpoint
    /// - `Err(TestError)` - The body could not be serialized
    pub async fn create_current_user_endpoint(
        &mut self,
        token: &str,
        user: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock("GET", "/api/users/me")
            .match_header("authorization", bearer(token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&user)?)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Create a mock endpoint answering any request to `path` with `status` and a
    /// JSON `message` body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Path to match; the query string is ignored
    /// - `status` - Status code to return, e.g. 401 or 500
    /// - `message` - Value of the `message` field in the body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub async fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::json!({ "message": message, "error": "Error" });

        Ok(self
            .setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body)?)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Create a mock `GET /api/real-estates` endpoint for one page.
    ///
    /// # Arguments
    /// - `token` - Bearer token the request must carry
    /// - `offset` - Expected `offset` query value
    /// - `limit` - Expected `limit` query value
    /// - `estates` - Listings to return as a bare JSON array
    /// - `expected_requests` - Number of times this endpoint should be called
    pub async fn create_real_estates_endpoint(
        &mut self,
        token: &str,
        offset: usize,
        limit: usize,
        estates: Vec<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock("GET", "/api/real-estates")
            .match_header("authorization", bearer(token).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".to_string(), offset.to_string()),
                Matcher::UrlEncoded("limit".to_string(), limit.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&estates)?)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Create a mock public `GET /api/real-estates/{id}` endpoint.
    pub async fn create_real_estate_endpoint(
        &mut self,
        id: &str,
        estate: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let path = format!("/api/real-estates/{}", id);

        Ok(self
            .setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&estate)?)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Create a mock `GET /api/users/{userId}/notifications` endpoint.
    pub async fn create_notifications_endpoint(
        &mut self,
        token: &str,
        user_id: &str,
        notifications: Vec<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let path = format!("/api/users/{}/notifications", user_id);

        Ok(self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_header("authorization", bearer(token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&notifications)?)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Create a mock `POST /api/users/{userId}/notifications` endpoint.
    ///
    /// # Arguments
    /// - `body` - Request body the endpoint must receive, compared as JSON
    pub async fn create_add_notification_endpoint(
        &mut self,
        token: &str,
        user_id: &str,
        body: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let path = format!("/api/users/{}/notifications", user_id);

        Ok(self
            .setup
            .server
            .mock("POST", path.as_str())
            .match_header("authorization", bearer(token).as_str())
            .match_body(Matcher::Json(body))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Create a mock endpoint for a per-rule action.
    ///
    /// # Arguments
    /// - `method` - `POST` for `enable`/`disable`, `DELETE` for removal
    /// - `action` - `Some("enable")`, `Some("disable")` or `None` for the rule itself
    pub async fn create_notification_action_endpoint(
        &mut self,
        token: &str,
        method: &str,
        user_id: &str,
        notification_id: &str,
        action: Option<&str>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let path = match action {
            Some(action) => format!(
                "/api/users/{}/notifications/{}/{}",
                user_id, notification_id, action
            ),
            None => format!("/api/users/{}/notifications/{}", user_id, notification_id),
        };

        Ok(self
            .setup
            .server
            .mock(method, path.as_str())
            .match_header("authorization", bearer(token).as_str())
            .with_status(204)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Create a mock `GET /api/users/{userId}/notifications/sent` endpoint for one page.
    pub async fn create_sent_notifications_endpoint(
        &mut self,
        token: &str,
        user_id: &str,
        limit: usize,
        offset: usize,
        sent: Vec<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let path = format!("/api/users/{}/notifications/sent", user_id);

        Ok(self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_header("authorization", bearer(token).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".to_string(), limit.to_string()),
                Matcher::UrlEncoded("offset".to_string(), offset.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&sent)?)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Create a mock geocoder search endpoint at `/search`.
    ///
    /// # Arguments
    /// - `query` - Expected `q` query value
    /// - `places` - Nominatim places to return
    pub async fn create_geocoder_endpoint(
        &mut self,
        query: &str,
        places: Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("format".to_string(), "json".to_string()),
                Matcher::UrlEncoded("q".to_string(), query.to_string()),
                Matcher::UrlEncoded("limit".to_string(), "1".to_string()),
                Matcher::UrlEncoded("countrycodes".to_string(), "cz".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&places)?)
            .expect(expected_requests)
            .create_async()
            .await)
    }
}
