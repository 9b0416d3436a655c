//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AuthStatus`], [`AuthSnapshot`] - Session state seen by the route gates
//! - [`AppRoute`] - Path-based navigation
//! - [`Product`], [`ProductTab`] - Catalog records and list tabs
//! - [`Comment`], [`CommentDraft`] - Product comments
//! - [`Peermall`], [`Sponsor`], [`UserProfile`] - Tenants and accounts
//! - [`OgMetadata`] - Scraped Open Graph tags
//! - [`LoadState`] - Remote data lifecycle for components
//!
//! Apart from the auth and route types these are plain transfer shapes
//! passed to and from the backend.

mod auth;
mod comment;
mod load;
mod og;
mod peermall;
mod product;
mod route;

pub use auth::{AuthSnapshot, AuthStatus, AuthToken, Credentials, SignupRequest};
pub use comment::{Comment, CommentDraft, remaining_chars};
pub use load::LoadState;
pub use og::OgMetadata;
pub use peermall::{Peermall, PeermallDraft, Sponsor, UserProfile};
#[cfg(test)]
pub(crate) use product::sample_product;
pub use product::{Product, ProductDraft, ProductStatus, ProductTab};
pub use route::AppRoute;
