//! Root application module.
//!
//! Contains the main App component, the [`AuthContext`] shared by every
//! page, and application-level setup following Leptos conventions.

use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{AppRouter, AuthProvider, Header};
use crate::config::DEFAULT_SESSION_STRATEGY;
use crate::core::auth::{ResolvedSession, SessionStrategy, resolve_session};
use crate::core::error::StorageError;
use crate::core::{ApiClient, HistoryNavigator, LocalStorage, session};
use crate::models::{AppRoute, AuthSnapshot, UserProfile};
use crate::utils::dom;

// ============================================================================
// AuthContext
// ============================================================================

/// Shared authentication status.
///
/// Published by [`AuthProvider`] and read by `GuestOnly`, the header and
/// any page that needs the signed-in user. The snapshot is the only thing
/// the provider-driven gate looks at.
///
/// Every session change (resolution, sign-in, sign-out) starts a new
/// epoch. Async results carry the epoch they were started in and are
/// dropped once a newer change has happened.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or plain
/// `Copy` values.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// `{ is_authenticated, is_loading }` view of the session.
    pub status: RwSignal<AuthSnapshot>,
    /// Profile of the signed-in user, when known.
    pub user: RwSignal<Option<UserProfile>>,
    epoch: StoredValue<u64>,
    strategy: SessionStrategy,
}

impl AuthContext {
    /// Creates a context in the loading state.
    pub fn new(strategy: SessionStrategy) -> Self {
        Self {
            status: RwSignal::new(AuthSnapshot::loading()),
            user: RwSignal::new(None),
            epoch: StoredValue::new(0),
            strategy,
        }
    }

    /// Current snapshot (tracked).
    pub fn snapshot(&self) -> AuthSnapshot {
        self.status.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.with(|s| s.is_authenticated && !s.is_loading)
    }

    /// Id of the signed-in user (tracked).
    pub fn user_id(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.id.clone()))
    }

    /// Re-run session resolution with the configured strategy.
    ///
    /// Publishes `is_loading = true` until the strategy finishes. A strategy
    /// that never finishes leaves the context loading.
    pub fn refresh(&self) {
        let epoch = self.begin_resolution();
        let ctx = *self;
        spawn_local(async move {
            let resolved =
                resolve_session(ctx.strategy, &LocalStorage, &ApiClient::default()).await;
            ctx.apply(epoch, resolved);
        });
    }

    /// Persist `token` and mark the visitor signed in.
    ///
    /// The profile is fetched in the background.
    pub fn sign_in(&self, token: &str) -> Result<(), StorageError> {
        session::save_token(&LocalStorage, token)?;
        let epoch = self.mark_signed_in();
        self.fetch_profile(epoch);
        Ok(())
    }

    /// Forget the session token and the profile.
    pub fn sign_out(&self) {
        session::clear_token(&LocalStorage);
        self.mark_signed_out();
    }

    /// Re-fetch the profile for the stored token.
    pub fn load_profile(&self) {
        if let Some(epoch) = self.epoch.try_get_value() {
            self.fetch_profile(epoch);
        }
    }

    fn fetch_profile(&self, epoch: u64) {
        let ctx = *self;
        spawn_local(async move {
            match ApiClient::from_session().me().await {
                Ok(user) => {
                    ctx.accept_profile(epoch, user);
                }
                Err(e) if e.rejects_token() => {
                    if ctx.is_current(epoch) {
                        ctx.sign_out();
                    }
                }
                Err(e) => logging::warn!("could not load profile: {e}"),
            }
        });
    }

    fn next_epoch(&self) -> u64 {
        self.epoch.update_value(|e| *e += 1);
        self.epoch.get_value()
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.try_with_value(|e| *e == epoch).unwrap_or(false)
    }

    /// Enter the loading state for a new resolution.
    fn begin_resolution(&self) -> u64 {
        self.status.set(AuthSnapshot::loading());
        self.next_epoch()
    }

    /// Publish a resolution result started in `epoch`.
    ///
    /// Returns `false` when the result is stale and was dropped.
    fn apply(&self, epoch: u64, resolved: ResolvedSession) -> bool {
        if !self.is_current(epoch) {
            logging::log!("dropping stale session resolution");
            return false;
        }
        logging::log!(
            "session resolved: authenticated={}",
            resolved.snapshot.is_authenticated
        );
        let needs_profile = resolved.snapshot.is_authenticated && resolved.user.is_none();
        let _ = self.user.try_set(resolved.user);
        let _ = self.status.try_set(resolved.snapshot);
        if needs_profile {
            self.fetch_profile(epoch);
        }
        true
    }

    fn mark_signed_in(&self) -> u64 {
        self.user.set(None);
        self.status.set(AuthSnapshot::authenticated());
        self.next_epoch()
    }

    fn mark_signed_out(&self) {
        self.next_epoch();
        self.user.set(None);
        self.status.set(AuthSnapshot::anonymous());
    }

    /// Store a profile fetched in `epoch`.
    ///
    /// Dropped when the session changed meanwhile or is no longer
    /// authenticated.
    fn accept_profile(&self, epoch: u64, user: UserProfile) -> bool {
        let signed_in = self
            .status
            .try_with_untracked(|s| s.is_authenticated)
            .unwrap_or(false);
        if !signed_in || !self.is_current(epoch) {
            return false;
        }
        self.user.try_set(Some(user)).is_none()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_STRATEGY)
    }
}

/// Get the [`AuthContext`] provided by [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext must be provided by AuthProvider")
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates the route signal and provides the [`HistoryNavigator`]
/// - Wraps the app in an [`AuthProvider`]
/// - Wraps the pages in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());
    provide_context(HistoryNavigator::new(route));

    view! {
        <AuthProvider strategy=DEFAULT_SESSION_STRATEGY>
            <Header />
            <main>
                <ErrorBoundary
                    fallback=|errors| view! {
                        <div style="
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            min-height: 60vh;
                            padding: 2rem;
                            text-align: center;
                        ">
                            <h1 style="color: #d64545; margin-bottom: 1rem;">
                                "Something went wrong"
                            </h1>
                            <p style="color: #6b6b6b; margin-bottom: 2rem;">
                                "An unexpected error occurred. Please try reloading the page."
                            </p>
                            <ul style="color: #d64545; font-size: 0.9rem;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                            <button on:click=move |_| dom::reload()>
                                "Reload Page"
                            </button>
                        </div>
                    }
                >
                    <AppRouter />
                </ErrorBoundary>
            </main>
        </AuthProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "alice@example.com".to_string(),
            nickname: "alice".to_string(),
            avatar_url: None,
            peermalls: vec![],
        }
    }

    fn with_context(test: impl FnOnce(AuthContext)) {
        let owner = Owner::new();
        owner.with(|| test(AuthContext::new(SessionStrategy::RemoteValidation)));
    }

    #[test]
    fn test_profile_after_sign_out_is_dropped() {
        with_context(|ctx| {
            let epoch = ctx.mark_signed_in();
            ctx.mark_signed_out();

            assert!(!ctx.accept_profile(epoch, alice()));
            assert_eq!(ctx.user.get_untracked(), None);
            assert_eq!(ctx.status.get_untracked(), AuthSnapshot::anonymous());
        });
    }

    #[test]
    fn test_profile_for_current_session_is_stored() {
        with_context(|ctx| {
            let epoch = ctx.mark_signed_in();
            assert!(ctx.accept_profile(epoch, alice()));
            assert_eq!(ctx.user.get_untracked(), Some(alice()));
        });
    }

    #[test]
    fn test_profile_from_previous_sign_in_is_dropped() {
        with_context(|ctx| {
            let first = ctx.mark_signed_in();
            ctx.mark_signed_out();
            let _second = ctx.mark_signed_in();

            assert!(!ctx.accept_profile(first, alice()));
            assert_eq!(ctx.user.get_untracked(), None);
        });
    }

    #[test]
    fn test_stale_resolution_is_dropped() {
        with_context(|ctx| {
            let stale = ctx.begin_resolution();
            let current = ctx.begin_resolution();
            let signed_in = ResolvedSession {
                snapshot: AuthSnapshot::authenticated(),
                user: Some(alice()),
            };

            assert!(!ctx.apply(stale, signed_in.clone()));
            assert!(ctx.status.get_untracked().is_loading);

            assert!(ctx.apply(current, signed_in));
            assert_eq!(ctx.status.get_untracked(), AuthSnapshot::authenticated());
            assert_eq!(ctx.user.get_untracked(), Some(alice()));
        });
    }

    #[test]
    fn test_resolution_after_sign_out_is_dropped() {
        with_context(|ctx| {
            let epoch = ctx.begin_resolution();
            ctx.mark_signed_out();
            let resolved = ResolvedSession {
                snapshot: AuthSnapshot::authenticated(),
                user: Some(alice()),
            };

            assert!(!ctx.apply(epoch, resolved));
            assert_eq!(ctx.status.get_untracked(), AuthSnapshot::anonymous());
            assert_eq!(ctx.user.get_untracked(), None);
        });
    }
}
