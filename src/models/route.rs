//! Path-based application routes.

use crate::config::paths;

/// Application routes.
///
/// URL format: `/products/42`, `/peermall/my-shop`, ...
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Product feed: `/`
    Home,
    /// `/login` (guest only)
    Login,
    /// `/signup` (guest only)
    Signup,
    /// `/mypage` (signed-in only)
    MyPage,
    /// `/peermall/new` (signed-in only)
    CreatePeermall,
    /// Storefront of a single peermall: `/peermall/{slug}`
    Peermall { slug: String },
    /// `/products/new` (signed-in only)
    CreateProduct,
    /// `/products/{id}`
    Product { id: String },
    /// Anything else.
    NotFound { path: String },
}

impl AppRoute {
    /// Parse a URL path into a route.
    ///
    /// Query string, fragment and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["mypage"] => Self::MyPage,
            ["peermall", "new"] => Self::CreatePeermall,
            ["peermall", slug] => Self::Peermall {
                slug: slug.to_string(),
            },
            ["products", "new"] => Self::CreateProduct,
            ["products", id] => Self::Product { id: id.to_string() },
            _ => Self::NotFound {
                path: format!("/{}", segments.join("/")),
            },
        }
    }

    /// Convert the route back to a URL path.
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => paths::HOME.to_string(),
            Self::Login => paths::LOGIN.to_string(),
            Self::Signup => paths::SIGNUP.to_string(),
            Self::MyPage => "/mypage".to_string(),
            Self::CreatePeermall => "/peermall/new".to_string(),
            Self::Peermall { slug } => format!("/peermall/{}", slug),
            Self::CreateProduct => "/products/new".to_string(),
            Self::Product { id } => format!("/products/{}", id),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Get current route from the browser URL.
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }

    /// Pages that must only be shown to signed-in visitors.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::MyPage | Self::CreatePeermall | Self::CreateProduct
        )
    }

    /// Pages that must only be shown to visitors without a session.
    pub fn guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/signup?ref=home"), AppRoute::Signup);
        assert_eq!(AppRoute::from_path("/mypage#top"), AppRoute::MyPage);
        assert_eq!(AppRoute::from_path("/peermall/new"), AppRoute::CreatePeermall);
        assert_eq!(
            AppRoute::from_path("/peermall/corner-shop"),
            AppRoute::Peermall {
                slug: "corner-shop".to_string()
            }
        );
        assert_eq!(AppRoute::from_path("/products/new"), AppRoute::CreateProduct);
        assert_eq!(
            AppRoute::from_path("/products/42"),
            AppRoute::Product {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(
            AppRoute::from_path("/products/42/edit"),
            AppRoute::NotFound {
                path: "/products/42/edit".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_path("//admin//"),
            AppRoute::NotFound {
                path: "/admin".to_string()
            }
        );
    }

    #[test]
    fn test_route_to_path() {
        for path in [
            "/",
            "/login",
            "/signup",
            "/mypage",
            "/peermall/new",
            "/peermall/corner-shop",
            "/products/new",
            "/products/42",
        ] {
            assert_eq!(AppRoute::from_path(path).to_path(), path);
        }
    }

    #[test]
    fn test_route_access_classes() {
        assert!(AppRoute::MyPage.requires_auth());
        assert!(AppRoute::CreateProduct.requires_auth());
        assert!(!AppRoute::Home.requires_auth());
        assert!(AppRoute::Login.guest_only());
        assert!(AppRoute::Signup.guest_only());
        assert!(!AppRoute::MyPage.guest_only());
    }
}
