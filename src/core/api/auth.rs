//! Account endpoints.

use super::ApiClient;
use crate::core::error::ApiError;
use crate::models::{AuthToken, Credentials, SignupRequest, UserProfile};

impl ApiClient {
    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        self.post_json("/auth/login", credentials).await
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthToken, ApiError> {
        self.post_json("/auth/signup", request).await
    }

    /// `GET /auth/me`: profile of the token's owner.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Unauthorized);
        }
        self.get_json("/auth/me").await
    }
}
