//! Authentication status types.

use serde::{Deserialize, Serialize};

/// Result of a session check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Check has not completed yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    /// Status implied by the presence of a session token.
    pub fn from_token_presence(present: bool) -> Self {
        if present {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// Two-flag view of the session published by the auth provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthSnapshot {
    /// Initial provider state: resolution in progress.
    pub const fn loading() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
        }
    }

    pub const fn authenticated() -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            is_loading: false,
        }
    }

    /// Collapse the snapshot into a three-state status.
    pub fn status(&self) -> AuthStatus {
        if self.is_loading {
            AuthStatus::Unknown
        } else {
            AuthStatus::from_token_presence(self.is_authenticated)
        }
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

/// Minimum password length accepted by the signup form.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Client-side signup form problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    InvalidEmail,
    PasswordTooShort,
    PasswordMismatch,
    MissingNickname,
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "enter a valid email address"),
            Self::PasswordTooShort => {
                write!(f, "password must be at least {} characters", MIN_PASSWORD_LEN)
            }
            Self::PasswordMismatch => write!(f, "passwords do not match"),
            Self::MissingNickname => write!(f, "nickname is required"),
        }
    }
}

impl SignupRequest {
    /// Check the form before sending it. `confirm` is the repeated password.
    pub fn validate(&self, confirm: &str) -> Result<(), SignupError> {
        if !looks_like_email(&self.email) {
            return Err(SignupError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }
        if self.password != confirm {
            return Err(SignupError::PasswordMismatch);
        }
        if self.nickname.trim().is_empty() {
            return Err(SignupError::MissingNickname);
        }
        Ok(())
    }
}

/// Shallow shape check; the backend does the real validation.
fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Token issued by the backend on login or signup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_loading() {
        let snap = AuthSnapshot::default();
        assert!(snap.is_loading);
        assert_eq!(snap.status(), AuthStatus::Unknown);
    }

    #[test]
    fn test_loading_masks_authentication() {
        let snap = AuthSnapshot {
            is_authenticated: true,
            is_loading: true,
        };
        assert_eq!(snap.status(), AuthStatus::Unknown);
    }

    #[test]
    fn test_resolved_statuses() {
        assert_eq!(AuthSnapshot::authenticated().status(), AuthStatus::Authenticated);
        assert_eq!(AuthSnapshot::anonymous().status(), AuthStatus::Unauthenticated);
    }

    fn signup(email: &str, password: &str, nickname: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            nickname: nickname.to_string(),
        }
    }

    #[test]
    fn test_signup_validation() {
        let ok = signup("alice@example.com", "hunter2hunter2", "alice");
        assert_eq!(ok.validate("hunter2hunter2"), Ok(()));
        assert_eq!(
            ok.validate("hunter3hunter3"),
            Err(SignupError::PasswordMismatch)
        );
        assert_eq!(
            signup("alice", "hunter2hunter2", "alice").validate("hunter2hunter2"),
            Err(SignupError::InvalidEmail)
        );
        assert_eq!(
            signup("alice@localhost", "hunter2hunter2", "alice").validate("hunter2hunter2"),
            Err(SignupError::InvalidEmail)
        );
        assert_eq!(
            signup("alice@example.com", "short", "alice").validate("short"),
            Err(SignupError::PasswordTooShort)
        );
        assert_eq!(
            signup("alice@example.com", "hunter2hunter2", " ").validate("hunter2hunter2"),
            Err(SignupError::MissingNickname)
        );
    }

    #[test]
    fn test_token_aliases() {
        let a: AuthToken = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        let b: AuthToken = serde_json::from_str(r#"{"accessToken":"t2"}"#).unwrap();
        let c: AuthToken = serde_json::from_str(r#"{"access_token":"t3","user":{}}"#).unwrap();
        assert_eq!(a.token, "t1");
        assert_eq!(b.token, "t2");
        assert_eq!(c.token, "t3");
    }
}
