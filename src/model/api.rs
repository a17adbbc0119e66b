use serde::{Deserialize, Serialize};

/// The response body when an error occurs with an API request.
///
/// The API is not consistent about which key carries the message, so both
/// are accepted.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message under the `error` key.
    pub error: Option<String>,
    /// The error message under the `message` key.
    pub message: Option<String>,
}

impl ErrorDto {
    /// Returns whichever message the envelope carried, preferring `error`.
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
