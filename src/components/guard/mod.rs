//! Route gates.
//!
//! - [`RequireAuth`] - signed-in only, checks the stored token directly
//! - [`GuestOnly`] - signed-out only, driven by the shared [`AuthContext`]
//!
//! Both components are thin views over [`use_token_gate`] and
//! [`use_guest_gate`], which own the reactive wiring.
//!
//! [`AuthContext`]: crate::app::AuthContext

mod guest_only;
mod require_auth;

pub use guest_only::GuestOnly;
pub use require_auth::RequireAuth;

use leptos::prelude::*;

use crate::core::{GateOutcome, KeyValueStore, Navigate, TokenGate, guest_gate};
use crate::models::AuthSnapshot;

/// Token gate that checks `store` once, after the first render.
///
/// The effect reads nothing reactive, so it runs exactly once per owner.
pub(crate) fn use_token_gate<S, N>(store: S, navigator: N) -> RwSignal<TokenGate>
where
    S: KeyValueStore + 'static,
    N: Navigate + 'static,
{
    let gate = RwSignal::new(TokenGate::new());
    Effect::new(move |_| {
        gate.update(|g| g.resolve(&store, &navigator));
    });
    gate
}

/// Guest gate following `status`, redirecting through `navigator`.
///
/// The memo only notifies on change, so each redirect is issued once.
pub(crate) fn use_guest_gate<N>(
    status: Signal<AuthSnapshot>,
    redirect_to: String,
    navigator: N,
) -> Memo<GateOutcome>
where
    N: Navigate + 'static,
{
    let outcome = Memo::new(move |_| guest_gate(status.get(), &redirect_to));
    Effect::new(move |_| outcome.with(|o| o.enforce(&navigator)));
    outcome
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::rc::Rc;

    use any_spawner::Executor;
    use tokio::task::LocalSet;

    use super::*;
    use crate::config::paths;
    use crate::config::storage::TOKEN_KEY;
    use crate::core::NavigateOptions;
    use crate::core::navigation::testing::RecordingNavigator;
    use crate::core::storage::MemoryStorage;

    /// Run `test` with a tokio-backed executor and a fresh reactive owner.
    async fn with_owner<F, Fut>(test: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();
        LocalSet::new().run_until(test()).await;
    }

    #[tokio::test]
    async fn test_token_gate_redirects_after_first_render() {
        with_owner(|| async {
            let navigator = Rc::new(RecordingNavigator::default());
            let gate = use_token_gate(MemoryStorage::new(), Rc::clone(&navigator));

            assert_eq!(gate.get_untracked(), TokenGate::Checking);
            assert!(navigator.is_empty());

            Executor::tick().await;

            assert_eq!(gate.get_untracked(), TokenGate::Denied);
            assert_eq!(
                navigator.calls(),
                vec![(paths::LOGIN.to_string(), NavigateOptions::replace())]
            );
        })
        .await;
    }

    #[tokio::test]
    async fn test_token_gate_grants_stored_session() {
        with_owner(|| async {
            let navigator = Rc::new(RecordingNavigator::default());
            let store = MemoryStorage::with_entries([(TOKEN_KEY, "abc123")]);
            let gate = use_token_gate(store, Rc::clone(&navigator));

            Executor::tick().await;

            assert_eq!(gate.get_untracked(), TokenGate::Granted);
            assert_eq!(gate.get_untracked().outcome(), GateOutcome::Render);
            assert!(navigator.is_empty());
        })
        .await;
    }

    #[tokio::test]
    async fn test_guest_gate_redirects_once_when_signed_in() {
        with_owner(|| async {
            let navigator = Rc::new(RecordingNavigator::default());
            let status = RwSignal::new(AuthSnapshot::loading());
            let outcome =
                use_guest_gate(status.into(), "/mypage".to_string(), Rc::clone(&navigator));

            Executor::tick().await;
            assert_eq!(outcome.get_untracked(), GateOutcome::Loading);
            assert!(navigator.is_empty());

            status.set(AuthSnapshot::authenticated());
            Executor::tick().await;
            assert_eq!(
                navigator.calls(),
                vec![("/mypage".to_string(), NavigateOptions::replace())]
            );

            // Same snapshot again: the memo does not change, no second redirect.
            status.set(AuthSnapshot::authenticated());
            Executor::tick().await;
            assert_eq!(navigator.calls().len(), 1);
        })
        .await;
    }

    #[tokio::test]
    async fn test_guest_gate_renders_for_anonymous_visitor() {
        with_owner(|| async {
            let navigator = Rc::new(RecordingNavigator::default());
            let status = RwSignal::new(AuthSnapshot::anonymous());
            let outcome = use_guest_gate(
                status.into(),
                paths::DEFAULT_GUEST_REDIRECT.to_string(),
                Rc::clone(&navigator),
            );

            Executor::tick().await;
            assert_eq!(outcome.get_untracked(), GateOutcome::Render);
            assert!(navigator.is_empty());
        })
        .await;
    }
}
