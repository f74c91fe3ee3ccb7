use serde::{Deserialize, Serialize};

/// The body returned when an API request fails
///
/// Depending on the endpoint the server fills either `message` or `error`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorDto {
    /// The first non-blank message the server supplied.
    pub fn into_message(self) -> Option<String> {
        self.message
            .into_iter()
            .chain(self.error)
            .find(|m| !m.trim().is_empty())
    }
}
