//! HTTP collaborator for the Planventure REST API.
//!
//! One [`ApiClient`] serves the whole app, shared through context. It is
//! built from an explicit [`ApiConfig`] and an injected [`TokenStore`]
//! rather than reaching for module-level globals, so the base URL and the
//! token slot are both swappable at construction time.

pub mod auth;
pub mod error;
pub mod trips;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::api::ErrorDto;

pub use error::ApiError;

/// Connection settings for the REST API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: option_env!("PLANVENTURE_API_URL")
                .unwrap_or("http://localhost:5000")
                .to_string(),
        }
    }
}

/// Where the session token lives between requests.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token slot in browser local storage, surviving page reloads.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "web")]
impl BrowserTokenStore {
    const KEY: &'static str = "token";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "web")]
impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(Self::KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(Self::KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(Self::KEY);
        }
    }
}

/// In-memory token slot for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// REST API client shared through the component tree.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    tokens: Rc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: impl TokenStore + 'static) -> Self {
        ApiClient {
            config,
            tokens: Rc::new(tokens),
        }
    }

    /// The token slot this client reads on every request.
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn with_auth(&self, request: Request) -> Request {
        match self.tokens.get() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.with_auth(Request::get(&self.url(path)));
        self.send(request).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let request = self.json_body(Request::post(&self.url(path)), body)?;
        self.send(request).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let request = self.json_body(Request::put(&self.url(path)), body)?;
        self.send(request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.with_auth(Request::delete(&self.url(path)));
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        match response.status() {
            200..=299 => Ok(()),
            status => Err(self.error_for_status(status, response).await),
        }
    }

    fn json_body(&self, request: Request, body: &impl Serialize) -> Result<Request, ApiError> {
        let body =
            serde_json::to_string(body).map_err(|err| ApiError::InvalidResponse(err.to_string()))?;
        Ok(self
            .with_auth(request)
            .header("Content-Type", "application/json")
            .body(body))
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        match response.status() {
            200..=299 => response
                .json::<T>()
                .await
                .map_err(|err| ApiError::InvalidResponse(err.to_string())),
            status => Err(self.error_for_status(status, response).await),
        }
    }

    /// Maps a non-2xx response, clearing the persisted token on a 401 so the
    /// next page load starts logged out.
    async fn error_for_status(&self, status: u16, response: Response) -> ApiError {
        match status {
            401 => {
                self.tokens.clear();
                ApiError::SessionExpired
            }
            404 => ApiError::NotFound,
            _ => match response.json::<ErrorDto>().await.ok().and_then(ErrorDto::into_message) {
                Some(message) => {
                    ApiError::Server(format!("Request failed with status {status}: {message}"))
                }
                None => {
                    let text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    ApiError::Server(format!("Request failed with status {status}: {text}"))
                }
            },
        }
    }
}
