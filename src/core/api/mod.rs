//! Backend REST API wrapper.
//!
//! All business behavior (accounts, catalog, comments, OG scraping) lives
//! in the backend. [`ApiClient`] only builds requests, attaches the bearer
//! token, and maps responses into typed models or [`ApiError`]s.
//!
//! Endpoint groups live in submodules as `impl ApiClient` blocks.

mod auth;
mod catalog;
mod comments;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::network::{API_BASE_URL, AUTH_HEADER};
use crate::core::auth::SessionValidator;
use crate::core::error::ApiError;
use crate::core::session;
use crate::core::storage::{KeyValueStore, LocalStorage};
use crate::models::UserProfile;

/// HTTP method used by [`ApiClient::send`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Client for the peermall backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client for the configured backend, authenticated with the stored
    /// session token when there is one.
    pub fn from_session() -> Self {
        Self::from_store(&LocalStorage)
    }

    pub fn from_store<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let client = Self::new(API_BASE_URL);
        match session::read_token(store) {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for an API path such as `/products/42`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        match &self.token {
            Some(token) => builder.header(AUTH_HEADER, &bearer(token)),
            None => builder,
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<Response, ApiError> {
        let builder = self.builder(method, path);
        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Request(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Request(e.to_string()))?,
        };

        let response = request.send().await?;
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &text))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path, None::<&()>).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::Post, path, Some(body)).await?;
        Ok(response.json::<T>().await?)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::Put, path, Some(body)).await?;
        Ok(response.json::<T>().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None::<&()>).await?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

/// Validates tokens against `GET /auth/me`.
impl SessionValidator for ApiClient {
    async fn validate(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.clone().with_token(token).me().await
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Percent-encode a path segment or query value.
fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::storage::TOKEN_KEY;
    use crate::core::storage::MemoryStorage;

    #[test]
    fn test_endpoint_joining() {
        let client = ApiClient::new("https://api.example/v1/");
        assert_eq!(
            client.endpoint("/products/42"),
            "https://api.example/v1/products/42"
        );
        assert_eq!(client.endpoint("auth/me"), "https://api.example/v1/auth/me");
    }

    #[test]
    fn test_client_from_store_picks_up_token() {
        let anonymous = ApiClient::from_store(&MemoryStorage::new());
        assert!(!anonymous.is_authenticated());

        let store = MemoryStorage::with_entries([(TOKEN_KEY, "abc123")]);
        let client = ApiClient::from_store(&store);
        assert!(client.is_authenticated());
        assert_eq!(client, ApiClient::new(API_BASE_URL).with_token("abc123"));
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer("abc123"), "Bearer abc123");
    }

    #[test]
    fn test_component_encoding() {
        assert_eq!(encode_component("corner-shop"), "corner-shop");
        assert_eq!(
            encode_component("https://a.example/x?y=1&z"),
            "https%3A%2F%2Fa.example%2Fx%3Fy%3D1%26z"
        );
        assert_eq!(encode_component("상"), "%EC%83%81");
        assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
    }
}
