//! Comment endpoints.

use super::{ApiClient, encode_component};
use crate::core::error::ApiError;
use crate::models::{Comment, CommentDraft};

impl ApiClient {
    /// `GET /products/{id}/comments`
    pub async fn comments(&self, product_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!(
            "/products/{}/comments",
            encode_component(product_id)
        ))
        .await
    }

    /// `POST /products/{id}/comments`
    pub async fn post_comment(
        &self,
        product_id: &str,
        draft: &CommentDraft,
    ) -> Result<Comment, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Unauthorized);
        }
        self.post_json(
            &format!("/products/{}/comments", encode_component(product_id)),
            draft,
        )
        .await
    }

    /// `DELETE /comments/{id}`
    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/comments/{}", encode_component(comment_id)))
            .await
    }
}
