//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The backend base URL can be overridden at compile time with the
//! `PEERMALL_API_URL` environment variable.

use crate::core::auth::SessionStrategy;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "peermall";

// =============================================================================
// Storage Configuration
// =============================================================================

/// Durable storage keys.
pub mod storage {
    /// localStorage key holding the session token.
    pub const TOKEN_KEY: &str = "peermall_token";
}

// =============================================================================
// Route Paths
// =============================================================================

/// Well-known client-side paths.
pub mod paths {
    /// Application root.
    pub const HOME: &str = "/";
    /// Destination for visitors without a session token.
    pub const LOGIN: &str = "/login";
    /// Account creation page.
    pub const SIGNUP: &str = "/signup";
    /// Default destination for signed-in visitors hitting guest-only pages.
    pub const DEFAULT_GUEST_REDIRECT: &str = HOME;
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Backend API settings.
pub mod network {
    /// Base URL of the peermall REST API (no trailing slash).
    pub const API_BASE_URL: &str = match option_env!("PEERMALL_API_URL") {
        Some(url) => url,
        None => "http://localhost:8080/api",
    };

    /// Header carrying the bearer token.
    pub const AUTH_HEADER: &str = "Authorization";
}

// =============================================================================
// Session Configuration
// =============================================================================

/// Strategy used by the shared authentication provider.
pub const DEFAULT_SESSION_STRATEGY: SessionStrategy = SessionStrategy::RemoteValidation;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Comment Configuration
// =============================================================================

/// Comment form limits.
pub mod comments {
    /// Maximum comment length in characters (after trimming).
    pub const MAX_LEN: usize = 500;
}
