//! Session resolution for the shared authentication provider.
//!
//! The provider can be backed by either [`SessionStrategy`]; the
//! provider-driven gate only ever sees the resulting [`AuthSnapshot`].

use leptos::logging;

use crate::core::error::ApiError;
use crate::core::session;
use crate::core::storage::KeyValueStore;
use crate::models::{AuthSnapshot, UserProfile};

/// How the provider decides whether the visitor is signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStrategy {
    /// Token presence in storage is enough. No network access.
    #[default]
    LocalToken,
    /// Token must be accepted by the backend (`GET /auth/me`).
    RemoteValidation,
}

/// Backend check of a session token.
#[allow(async_fn_in_trait)]
pub trait SessionValidator {
    async fn validate(&self, token: &str) -> Result<UserProfile, ApiError>;
}

/// Outcome of a session resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSession {
    pub snapshot: AuthSnapshot,
    /// Profile, when the strategy fetched one.
    pub user: Option<UserProfile>,
}

impl ResolvedSession {
    fn anonymous() -> Self {
        Self {
            snapshot: AuthSnapshot::anonymous(),
            user: None,
        }
    }
}

/// Resolve the current session with `strategy`.
///
/// With [`SessionStrategy::RemoteValidation`] a token rejected by
/// `GET /auth/me` (401 or 403) is removed from storage. Other failures (offline, 5xx) leave the token in
/// place and report the visitor as signed out for now.
pub async fn resolve_session<S, V>(
    strategy: SessionStrategy,
    store: &S,
    validator: &V,
) -> ResolvedSession
where
    S: KeyValueStore + ?Sized,
    V: SessionValidator + ?Sized,
{
    let Some(token) = session::read_token(store) else {
        return ResolvedSession::anonymous();
    };

    match strategy {
        SessionStrategy::LocalToken => ResolvedSession {
            snapshot: AuthSnapshot::authenticated(),
            user: None,
        },
        SessionStrategy::RemoteValidation => match validator.validate(&token).await {
            Ok(user) => ResolvedSession {
                snapshot: AuthSnapshot::authenticated(),
                user: Some(user),
            },
            Err(e) if e.rejects_token() => {
                logging::log!("session token rejected, signing out");
                session::clear_token(store);
                ResolvedSession::anonymous()
            }
            Err(e) => {
                logging::warn!("session validation failed: {e}");
                ResolvedSession::anonymous()
            }
        },
    }
}
