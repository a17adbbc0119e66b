use crate::model::auth::{CredentialsDto, TokenDto};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &CredentialsDto) -> Result<TokenDto, ApiError> {
        self.post_json("/auth/login", credentials).await
    }

    /// Create an account and receive a session token for it.
    pub async fn register(&self, credentials: &CredentialsDto) -> Result<TokenDto, ApiError> {
        self.post_json("/auth/register", credentials).await
    }
}
