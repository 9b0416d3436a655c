//! Peermall, product, sponsor and OG endpoints.

use serde::Serialize;

use super::{ApiClient, encode_component};
use crate::core::error::ApiError;
use crate::models::{OgMetadata, Peermall, PeermallDraft, Product, ProductDraft, Sponsor};

#[derive(Serialize)]
struct OgRequest<'a> {
    url: &'a str,
}

/// Path for a product listing, optionally scoped to one peermall.
pub(super) fn products_path(peermall: Option<&str>) -> String {
    match peermall {
        Some(slug) => format!("/products?peermall={}", encode_component(slug)),
        None => "/products".to_string(),
    }
}

impl ApiClient {
    /// `POST /peermalls`
    pub async fn create_peermall(&self, draft: &PeermallDraft) -> Result<Peermall, ApiError> {
        self.post_json("/peermalls", draft).await
    }

    /// `GET /peermalls/{slug}`
    pub async fn peermall(&self, slug: &str) -> Result<Peermall, ApiError> {
        self.get_json(&format!("/peermalls/{}", encode_component(slug)))
            .await
    }

    /// `GET /products[?peermall=slug]`
    pub async fn products(&self, peermall: Option<&str>) -> Result<Vec<Product>, ApiError> {
        self.get_json(&products_path(peermall)).await
    }

    /// `GET /products/{id}`
    pub async fn product(&self, id: &str) -> Result<Product, ApiError> {
        self.get_json(&format!("/products/{}", encode_component(id)))
            .await
    }

    /// `POST /products`
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        self.post_json("/products", draft).await
    }

    /// `PUT /products/{id}`
    pub async fn update_product(
        &self,
        id: &str,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        self.put_json(&format!("/products/{}", encode_component(id)), draft)
            .await
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/products/{}", encode_component(id)))
            .await
    }

    /// `GET /users/{id}/sponsors`
    pub async fn sponsors(&self, user_id: &str) -> Result<Vec<Sponsor>, ApiError> {
        self.get_json(&format!("/users/{}/sponsors", encode_component(user_id)))
            .await
    }

    /// `POST /og/parse`: ask the backend to scrape Open Graph tags.
    pub async fn parse_og(&self, url: &str) -> Result<OgMetadata, ApiError> {
        self.post_json("/og/parse", &OgRequest { url }).await
    }
}
