use serde::{Deserialize, Serialize};

/// Credentials submitted to the login and registration endpoints.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

/// The session token issued on a successful login or registration.
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenDto {
    pub token: String,
}
