use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication token has expired")]
    TokenExpired,
    #[error("Login failed: {0}")]
    ProviderError(String),
    #[error("Login response did not contain an access token")]
    MissingAccessToken,
    #[error("Failed to login user due to OAuth state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to no pending OAuth state being stored")]
    CsrfMissingValue,
    #[error("User ID not found in storage")]
    UserIdNotStored,
}
