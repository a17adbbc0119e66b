use thiserror::Error;

/// Failure surfaced to the UI when an API request cannot produce its
/// resource.
///
/// Messages are user-facing; pages render them directly in their error
/// states.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the session token. The persisted token has
    /// already been cleared by the time this is returned.
    #[error("Session expired. Please login again.")]
    SessionExpired,
    /// The resource does not exist, or a 2xx payload was missing it.
    #[error("Trip not found")]
    NotFound,
    /// The request never produced a response.
    #[error("Failed to send request: {0}")]
    Network(String),
    /// A 2xx response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
    /// The server answered with an error envelope.
    #[error("{0}")]
    Server(String),
}
