//! Authenticated HTTP client for the Havasi API.
//!
//! Every data-fetching operation in the crate goes through [`ApiClient`]. Authenticated
//! requests carry `Authorization: Bearer <token>` from the persisted [`TokenService`] and
//! pass through [`ApiClient::request`], which intercepts HTTP 401 on any of them: both
//! persisted records are cleared, the registered expiry handler runs (the session
//! manager's forced logout), and the caller receives [`AuthError::TokenExpired`] instead
//! of the response. Other non-success statuses are turned into errors by
//! [`handle_api_error`]. No request is retried.

pub mod notification;
pub mod real_estate;
pub mod user;

use std::sync::{Arc, OnceLock};

use dioxus_logger::tracing;
use reqwest::{header, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::{auth::AuthError, Error},
    model::api::ErrorDto,
    storage::{TokenService, UserService},
};

pub use real_estate::RealEstateQuery;

/// Callback run when any authenticated request comes back with 401
pub type ExpiryHandler = Arc<dyn Fn() + Send + Sync>;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: TokenService,
    users: UserService,
    on_token_expired: OnceLock<ExpiryHandler>,
}

impl ApiClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Arguments
    /// - `base_url` - Root of the API host, e.g. `https://api.havasi.cz`
    /// - `tokens` - Persisted bearer token record read on every authenticated request
    /// - `users` - Persisted user ID record, cleared on 401 and written by the session manager
    pub fn new(base_url: Url, tokens: TokenService, users: UserService) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url, tokens, users)
    }

    pub fn with_http_client(
        http: reqwest::Client,
        base_url: Url,
        tokens: TokenService,
        users: UserService,
    ) -> Self {
        Self {
            http,
            base_url,
            tokens,
            users,
            on_token_expired: OnceLock::new(),
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Registers the handler invoked on 401.
    ///
    /// Only the first registration takes effect; later calls are ignored and return
    /// `false`, so a handler can never be replaced or run twice per expiry.
    pub fn register_expiry_handler(&self, handler: ExpiryHandler) -> bool {
        let registered = self.on_token_expired.set(handler).is_ok();
        if !registered {
            tracing::debug!("Token expiry handler already registered, ignoring");
        }

        registered
    }

    /// Builds an absolute endpoint URL from path segments, escaping each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::UrlError(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Request builder with the bearer header attached.
    ///
    /// Without a stored token the header is omitted and the request still goes out;
    /// the server's 401 is then handled like any other expiry.
    pub fn authorized(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);

        match self.tokens.get() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Request builder for endpoints that need no authentication.
    pub fn public(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Sends an authenticated request, intercepting 401.
    ///
    /// # Returns
    /// - `Ok(Response)` - Any response other than 401, for the caller to interpret
    /// - `Err(Error::AuthError(AuthError::TokenExpired))` - The server answered 401
    /// - `Err(Error::Transport)` - No response was received
    pub async fn request(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Request failed without a response: {}", e);
            Error::Transport(e)
        })?;

        tracing::debug!(status = %response.status(), url = %response.url(), "API response");

        if response.status() == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(AuthError::TokenExpired.into());
        }

        Ok(response)
    }

    /// Sends a request that bypasses 401 interception.
    pub async fn send_public(&self, builder: RequestBuilder) -> Result<Response, Error> {
        builder.send().await.map_err(|e| {
            tracing::error!("Request failed without a response: {}", e);
            Error::Transport(e)
        })
    }

    fn expire_session(&self) {
        tracing::warn!("Authentication token rejected by the API, forcing logout");

        if let Err(e) = self.tokens.remove() {
            tracing::error!("Failed to clear stored access token: {}", e);
        }
        if let Err(e) = self.users.remove() {
            tracing::error!("Failed to clear stored user ID: {}", e);
        }

        if let Some(handler) = self.on_token_expired.get() {
            handler();
        }
    }
}

/// Passes successful responses through and converts everything else via [`handle_api_error`].
pub(crate) async fn ensure_success(
    response: Response,
    default_message: &str,
) -> Result<Response, Error> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(handle_api_error(response, default_message).await)
    }
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let body = response.text().await.map_err(Error::Transport)?;

    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
}

/// Converts a non-success response into an error.
///
/// The message is taken from a JSON body's `message` or `error` field, else from a
/// plain text body, else `default_message`. 4xx map to [`Error::Client`] and 5xx to
/// [`Error::Server`].
pub async fn handle_api_error(response: Response, default_message: &str) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = extract_message(&body).unwrap_or_else(|| default_message.to_string());

    let err = status_error(status, message);
    tracing::error!("{}", err);

    err
}

pub(crate) fn status_error(status: StatusCode, message: String) -> Error {
    let code = status.as_u16();

    if status.is_client_error() {
        Error::Client {
            status: code,
            message,
        }
    } else if status.is_server_error() {
        Error::Server {
            status: code,
            message,
        }
    } else {
        Error::UnexpectedStatus {
            status: code,
            message,
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(_)) => serde_json::from_str::<ErrorDto>(body)
            .ok()
            .and_then(ErrorDto::into_message),
        Ok(serde_json::Value::String(text)) if !text.trim().is_empty() => Some(text),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}
