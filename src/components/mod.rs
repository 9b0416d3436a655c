//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`AuthProvider`] - Session resolution shared by every page
//! - [`guard`] - `RequireAuth` / `GuestOnly` route gates
//! - [`Header`] - Top navigation bar
//! - [`pages`] - One component per route
//! - [`product`], [`comment`] - Catalog and comment widgets
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod auth_provider;
pub mod comment;
pub mod guard;
pub mod header;
pub mod hooks;
pub mod icons;
pub mod link;
pub mod loading;
pub mod pages;
pub mod product;
pub mod router;
pub mod tabs;

pub use auth_provider::AuthProvider;
pub use header::Header;
pub use router::AppRouter;
