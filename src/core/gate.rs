//! Route gates.
//!
//! Two independent gates decide what a protected page renders:
//!
//! - [`TokenGate`] reads the session token straight from durable storage,
//!   once per mount. Used by `RequireAuth`.
//! - [`guest_gate`] is a pure function of the shared provider's
//!   [`AuthSnapshot`] and a redirect destination. Used by `GuestOnly`.
//!
//! Both produce a [`GateOutcome`]; [`GateOutcome::enforce`] performs the
//! replacing navigation for redirects. The Leptos components only wire
//! these to signals and effects.

use leptos::logging;

use crate::config::paths;
use crate::core::navigation::{Navigate, NavigateOptions};
use crate::core::session;
use crate::core::storage::KeyValueStore;
use crate::models::AuthSnapshot;
use crate::utils::sanitize_internal_path;

/// What a gate renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Status unknown: show the loading placeholder.
    Loading,
    /// Navigate away (replacing history); render nothing.
    Redirect(String),
    /// Render the wrapped content.
    Render,
}

impl GateOutcome {
    /// Issue the replacing navigation for a redirect. No-op otherwise.
    pub fn enforce<N: Navigate + ?Sized>(&self, navigator: &N) {
        if let Self::Redirect(path) = self {
            navigator.navigate(path, NavigateOptions::replace());
        }
    }
}

// ============================================================================
// Storage-backed gate
// ============================================================================

/// Authenticated-only gate state: `Checking -> Denied | Granted`.
///
/// The transition happens at most once per instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenGate {
    #[default]
    Checking,
    /// No usable session token.
    Denied,
    Granted,
}

impl TokenGate {
    pub fn new() -> Self {
        Self::Checking
    }

    /// What to render in the current state.
    pub fn outcome(&self) -> GateOutcome {
        match self {
            Self::Checking => GateOutcome::Loading,
            Self::Denied => GateOutcome::Redirect(paths::LOGIN.to_string()),
            Self::Granted => GateOutcome::Render,
        }
    }

    /// Run the storage check and leave `Checking`.
    ///
    /// On denial the login redirect is issued through `navigator`.
    /// Calling this on an already resolved gate does nothing.
    pub fn resolve<S, N>(&mut self, store: &S, navigator: &N)
    where
        S: KeyValueStore + ?Sized,
        N: Navigate + ?Sized,
    {
        if *self != Self::Checking {
            return;
        }

        *self = if session::has_token(store) {
            Self::Granted
        } else {
            logging::log!("no session token, redirecting to {}", paths::LOGIN);
            Self::Denied
        };
        self.outcome().enforce(navigator);
    }
}

// ============================================================================
// Provider-driven gate
// ============================================================================

/// Unauthenticated-only decision.
///
/// - loading: [`GateOutcome::Loading`], whatever `is_authenticated` says
/// - authenticated: redirect to `redirect_to`
/// - anonymous: render
///
/// `redirect_to` must be an internal path; anything else is replaced by
/// the default destination.
pub fn guest_gate(snapshot: AuthSnapshot, redirect_to: &str) -> GateOutcome {
    if snapshot.is_loading {
        GateOutcome::Loading
    } else if snapshot.is_authenticated {
        GateOutcome::Redirect(sanitize_internal_path(redirect_to, paths::DEFAULT_GUEST_REDIRECT))
    } else {
        GateOutcome::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::storage::TOKEN_KEY;
    use crate::core::navigation::testing::RecordingNavigator;
    use crate::core::storage::MemoryStorage;

    fn replace_to(path: &str) -> (String, NavigateOptions) {
        (path.to_string(), NavigateOptions { replace: true })
    }

    // ------------------------------------------------------------------
    // TokenGate
    // ------------------------------------------------------------------

    #[test]
    fn test_checking_shows_loading_only() {
        let gate = TokenGate::new();
        assert_eq!(gate.outcome(), GateOutcome::Loading);
        assert_ne!(gate.outcome(), GateOutcome::Render);
    }

    #[test]
    fn test_no_navigation_before_resolution() {
        let nav = RecordingNavigator::default();
        let store = MemoryStorage::new();
        let gate = TokenGate::new();

        // Rendering the checking state any number of times never navigates.
        for _ in 0..3 {
            gate.outcome().enforce(&nav);
        }
        assert!(nav.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_token_present_grants() {
        let store = MemoryStorage::with_entries([(TOKEN_KEY, "abc123")]);
        let nav = RecordingNavigator::default();
        let mut gate = TokenGate::new();

        gate.resolve(&store, &nav);

        assert_eq!(gate, TokenGate::Granted);
        assert_eq!(gate.outcome(), GateOutcome::Render);
        assert!(nav.is_empty());
    }

    #[test]
    fn test_token_missing_redirects_to_login() {
        let store = MemoryStorage::new();
        let nav = RecordingNavigator::default();
        let mut gate = TokenGate::new();

        gate.resolve(&store, &nav);

        assert_eq!(gate, TokenGate::Denied);
        assert_ne!(gate.outcome(), GateOutcome::Render);
        assert_eq!(nav.calls(), vec![replace_to("/login")]);
    }

    #[test]
    fn test_empty_token_redirects_to_login() {
        let store = MemoryStorage::with_entries([(TOKEN_KEY, "")]);
        let nav = RecordingNavigator::default();
        let mut gate = TokenGate::new();

        gate.resolve(&store, &nav);

        assert_eq!(gate, TokenGate::Denied);
        assert_eq!(nav.calls(), vec![replace_to("/login")]);
    }

    #[test]
    fn test_any_non_empty_token_grants() {
        for token in ["x", "not-a-jwt", "{\"broken\":", "   "] {
            let store = MemoryStorage::with_entries([(TOKEN_KEY, token)]);
            let nav = RecordingNavigator::default();
            let mut gate = TokenGate::new();
            gate.resolve(&store, &nav);
            assert_eq!(gate, TokenGate::Granted, "token {:?}", token);
            assert!(nav.is_empty());
        }
    }

    #[test]
    fn test_resolves_only_once() {
        let store = MemoryStorage::new();
        let nav = RecordingNavigator::default();
        let mut gate = TokenGate::new();

        gate.resolve(&store, &nav);
        // Token appears later; the mount has already been decided.
        store.set_item(TOKEN_KEY, "abc123").unwrap();
        gate.resolve(&store, &nav);

        assert_eq!(gate, TokenGate::Denied);
        assert_eq!(nav.calls().len(), 1);
    }

    // ------------------------------------------------------------------
    // guest_gate
    // ------------------------------------------------------------------

    #[test]
    fn test_loading_shows_spinner_regardless_of_auth() {
        for is_authenticated in [false, true] {
            let snap = AuthSnapshot {
                is_authenticated,
                is_loading: true,
            };
            assert_eq!(guest_gate(snap, "/"), GateOutcome::Loading);
        }
    }

    #[test]
    fn test_authenticated_redirects_to_destination() {
        let nav = RecordingNavigator::default();
        let outcome = guest_gate(AuthSnapshot::authenticated(), "/mypage");
        assert_eq!(outcome, GateOutcome::Redirect("/mypage".to_string()));
        assert_ne!(outcome, GateOutcome::Render);

        outcome.enforce(&nav);
        assert_eq!(nav.calls(), vec![replace_to("/mypage")]);
    }

    #[test]
    fn test_default_destination_is_root() {
        let outcome = guest_gate(AuthSnapshot::authenticated(), paths::DEFAULT_GUEST_REDIRECT);
        assert_eq!(outcome, GateOutcome::Redirect("/".to_string()));
    }

    #[test]
    fn test_external_destination_falls_back_to_root() {
        for dest in ["https://evil.example", "//evil.example", "", "mypage"] {
            assert_eq!(
                guest_gate(AuthSnapshot::authenticated(), dest),
                GateOutcome::Redirect("/".to_string())
            );
        }
    }

    #[test]
    fn test_anonymous_renders_without_navigation() {
        let nav = RecordingNavigator::default();
        let outcome = guest_gate(AuthSnapshot::anonymous(), "/");
        assert_eq!(outcome, GateOutcome::Render);

        outcome.enforce(&nav);
        assert!(nav.is_empty());
    }

    #[test]
    fn test_loading_then_authenticated_sequence() {
        let nav = RecordingNavigator::default();
        let snapshots = [
            AuthSnapshot {
                is_loading: true,
                is_authenticated: false,
            },
            AuthSnapshot {
                is_loading: false,
                is_authenticated: true,
            },
        ];

        let outcomes: Vec<GateOutcome> = snapshots
            .into_iter()
            .map(|snap| {
                let outcome = guest_gate(snap, paths::DEFAULT_GUEST_REDIRECT);
                outcome.enforce(&nav);
                outcome
            })
            .collect();

        assert_eq!(
            outcomes,
            vec![GateOutcome::Loading, GateOutcome::Redirect("/".to_string())]
        );
        assert_eq!(nav.calls(), vec![replace_to("/")]);
    }
}
