//! Error types for the Havasi front-end.
//!
//! Every fallible operation in the crate returns [`Error`]. Domain-specific errors
//! (authentication, configuration, persisted storage) live in their own modules and
//! convert into [`Error`] through `#[from]`, so `?` works across layers. The UI only
//! ever needs [`Error::user_message`] to populate the error toast.

pub mod auth;
pub mod config;
pub mod storage;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, storage::StorageError};

/// Fallback toast text when no better message is available.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Main error type for the Havasi front-end.
///
/// # Error Categories
/// - Authentication errors (expired token, OAuth callback problems)
/// - Client/server HTTP errors with the message extracted from the response body
/// - Local validation errors raised before any request is sent
/// - Transport errors where no response was received at all
/// - Configuration and persisted storage errors
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (expired token, OAuth callback validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Configuration error (invalid environment value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Persisted key-value storage error.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// The API answered with a 4xx status other than 401.
    #[error("Client Error ({status}): {message}")]
    Client { status: u16, message: String },
    /// The API answered with a 5xx status.
    #[error("Server Error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The API answered with a status that is neither success nor error (1xx/3xx).
    #[error("Unexpected response ({status}): {message}")]
    UnexpectedStatus { status: u16, message: String },
    /// A required form field is missing or invalid; no request was attempted.
    #[error("{0}")]
    Validation(String),
    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Network or transport failure, no response was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// URL construction failed.
    #[error(transparent)]
    UrlError(#[from] url::ParseError),
}

impl Error {
    /// Text shown to the user in the error toast.
    ///
    /// Transport failures carry library-internal detail that means nothing to a
    /// user, so they collapse to [`UNKNOWN_ERROR_MESSAGE`]; everything else uses
    /// its `Display` output.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
            err => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    message
                }
            }
        }
    }

    /// Whether this error came from the 401 interceptor.
    pub fn is_token_expired(&self) -> bool {
        matches!(self, Self::AuthError(AuthError::TokenExpired))
    }
}
