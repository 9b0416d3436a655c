//! Peermalls (tenants), their sponsors, and user profiles.

use serde::{Deserialize, Serialize};

/// Signed-in user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Slugs of the peermalls this user owns.
    #[serde(default)]
    pub peermalls: Vec<String>,
}

impl UserProfile {
    /// Name shown in the header.
    pub fn display_name(&self) -> &str {
        if self.nickname.trim().is_empty() {
            &self.email
        } else {
            &self.nickname
        }
    }
}

/// A tenant storefront.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peermall {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Creation payload for a peermall.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PeermallDraft {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

/// Validation failures for [`PeermallDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeermallDraftError {
    MissingName,
    /// Slug must be 3-32 chars of lowercase letters, digits and dashes,
    /// not starting or ending with a dash.
    InvalidSlug,
    /// Slug collides with a client route segment.
    ReservedSlug,
}

impl std::fmt::Display for PeermallDraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "peermall name is required"),
            Self::InvalidSlug => write!(
                f,
                "address must be 3-32 lowercase letters, digits or dashes"
            ),
            Self::ReservedSlug => write!(f, "this address is reserved"),
        }
    }
}

const RESERVED_SLUGS: &[&str] = &["new", "edit", "admin", "api"];

impl PeermallDraft {
    /// Check a storefront slug.
    pub fn validate_slug(slug: &str) -> Result<(), PeermallDraftError> {
        let len = slug.len();
        let charset_ok = slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !(3..=32).contains(&len)
            || !charset_ok
            || slug.starts_with('-')
            || slug.ends_with('-')
        {
            return Err(PeermallDraftError::InvalidSlug);
        }
        if RESERVED_SLUGS.contains(&slug) {
            return Err(PeermallDraftError::ReservedSlug);
        }
        Ok(())
    }

    /// Trim fields and validate.
    pub fn validated(mut self) -> Result<Self, PeermallDraftError> {
        self.name = self.name.trim().to_string();
        self.slug = self.slug.trim().to_lowercase();
        if self.name.is_empty() {
            return Err(PeermallDraftError::MissingName);
        }
        Self::validate_slug(&self.slug)?;
        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Ok(self)
    }
}

/// Sponsor backing a user's peermall.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserProfile {
            id: "u1".to_string(),
            email: "a@b.c".to_string(),
            nickname: "alice".to_string(),
            avatar_url: None,
            peermalls: vec![],
        };
        assert_eq!(user.display_name(), "alice");
        user.nickname = "  ".to_string();
        assert_eq!(user.display_name(), "a@b.c");
    }

    #[test]
    fn test_slug_rules() {
        assert!(PeermallDraft::validate_slug("corner-shop").is_ok());
        assert!(PeermallDraft::validate_slug("abc").is_ok());
        assert_eq!(
            PeermallDraft::validate_slug("ab"),
            Err(PeermallDraftError::InvalidSlug)
        );
        assert_eq!(
            PeermallDraft::validate_slug("Corner"),
            Err(PeermallDraftError::InvalidSlug)
        );
        assert_eq!(
            PeermallDraft::validate_slug("-shop"),
            Err(PeermallDraftError::InvalidSlug)
        );
        assert_eq!(
            PeermallDraft::validate_slug("my shop"),
            Err(PeermallDraftError::InvalidSlug)
        );
        assert_eq!(
            PeermallDraft::validate_slug("new"),
            Err(PeermallDraftError::ReservedSlug)
        );
    }

    #[test]
    fn test_validated_normalizes() {
        let draft = PeermallDraft {
            slug: " Corner-Shop ".to_string(),
            name: " Corner Shop ".to_string(),
            description: Some("".to_string()),
        }
        .validated()
        .unwrap();
        assert_eq!(draft.slug, "corner-shop");
        assert_eq!(draft.name, "Corner Shop");
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_profile_defaults() {
        let user: UserProfile =
            serde_json::from_str(r#"{"id":"u1","email":"a@b.c","nickname":"alice"}"#).unwrap();
        assert!(user.peermalls.is_empty());
        assert_eq!(user.avatar_url, None);
    }
}
