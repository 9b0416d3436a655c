//! URL validation and security utilities.
//!
//! - [`sanitize_internal_path`] keeps redirects inside the application
//! - [`validate_product_url`] checks links submitted for OG scraping

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host/domain
    NoHost,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
        }
    }
}

/// Return `path` if it is an internal absolute path, otherwise `fallback`.
///
/// Internal paths start with a single `/`. Protocol-relative (`//host`),
/// absolute (`https://...`), backslash tricks and relative paths are
/// rejected so a redirect can never leave the application.
pub fn sanitize_internal_path(path: &str, fallback: &str) -> String {
    let path = path.trim();
    let is_internal = path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.contains("://");

    if is_internal {
        path.to_string()
    } else {
        if !path.is_empty() {
            leptos::logging::warn!("rejected redirect target {path:?}, using {fallback}");
        }
        fallback.to_string()
    }
}

/// Validate an external product page URL before asking the backend to
/// scrape it.
///
/// Returns the trimmed URL.
pub fn validate_product_url(url: &str) -> Result<String, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return Err(UrlValidationError::InvalidProtocol);
    }

    if extract_host(url).is_none() {
        return Err(UrlValidationError::NoHost);
    }

    Ok(url.to_string())
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    let lower = url.to_lowercase();
    let without_protocol = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;

    // Host part is everything before the first /, ? or #
    let host_part = without_protocol.split(['/', '?', '#']).next()?;

    // Drop credentials and port
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_paths_kept() {
        assert_eq!(sanitize_internal_path("/", "/"), "/");
        assert_eq!(sanitize_internal_path("/mypage", "/"), "/mypage");
        assert_eq!(
            sanitize_internal_path(" /products/42?tab=comments ", "/"),
            "/products/42?tab=comments"
        );
    }

    #[test]
    fn test_external_paths_rejected() {
        assert_eq!(sanitize_internal_path("", "/"), "/");
        assert_eq!(sanitize_internal_path("mypage", "/"), "/");
        assert_eq!(sanitize_internal_path("//evil.example", "/"), "/");
        assert_eq!(sanitize_internal_path("/\\evil.example", "/"), "/");
        assert_eq!(sanitize_internal_path("https://evil.example", "/"), "/");
        assert_eq!(sanitize_internal_path("javascript:alert(1)", "/home"), "/home");
    }

    #[test]
    fn test_valid_product_urls() {
        assert_eq!(
            validate_product_url(" https://shop.example/items/1 "),
            Ok("https://shop.example/items/1".to_string())
        );
        assert!(validate_product_url("http://shop.example:8080").is_ok());
        assert!(validate_product_url("HTTPS://SHOP.EXAMPLE/x").is_ok());
    }

    #[test]
    fn test_invalid_product_urls() {
        assert_eq!(validate_product_url(""), Err(UrlValidationError::Empty));
        assert_eq!(
            validate_product_url("ftp://shop.example"),
            Err(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_product_url("javascript:alert(1)"),
            Err(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_product_url("https://"),
            Err(UrlValidationError::NoHost)
        );
        assert_eq!(
            validate_product_url("https:///path"),
            Err(UrlValidationError::NoHost)
        );
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://shop.example/user"),
            Some("shop.example".to_string())
        );
        assert_eq!(
            extract_host("https://user:pw@shop.example:443/x"),
            Some("shop.example".to_string())
        );
        assert_eq!(extract_host("https://"), None);
    }
}
