//! Utility modules for web, DOM, and display formatting.
//!
//! Provides:
//! - [`dom`] - Browser window and localStorage accessors
//! - [`format`] - Price, date and text formatting
//! - [`sanitize_internal_path`], [`validate_product_url`] - URL security checks

pub mod dom;
pub mod format;
mod url;

pub use url::{sanitize_internal_path, validate_product_url};
