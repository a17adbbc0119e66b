//! Session state shared across the app.

/// The in-memory view of the current session, provided as a root context
/// signal and restored from the persisted token slot at startup.
///
/// The token here mirrors what the [`TokenStore`](crate::client::api::TokenStore)
/// holds; login, logout, and session-expiry handling update both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
