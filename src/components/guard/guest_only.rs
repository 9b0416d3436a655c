//! Unauthenticated-only gate.

use leptos::prelude::*;

use super::use_guest_gate;
use crate::app::use_auth;
use crate::components::loading::Spinner;
use crate::config::paths;
use crate::core::{GateOutcome, use_navigator};

/// Renders `children` only to visitors without a session.
///
/// Driven purely by the shared auth snapshot: spinner while loading,
/// replacing redirect to `redirect_to` (default `/`) once signed in.
#[component]
pub fn GuestOnly(
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let redirect_to =
        redirect_to.unwrap_or_else(|| paths::DEFAULT_GUEST_REDIRECT.to_string());
    let outcome = use_guest_gate(auth.status.into(), redirect_to, use_navigator());

    move || match outcome.get() {
        GateOutcome::Loading => view! { <Spinner /> }.into_any(),
        GateOutcome::Redirect(_) => ().into_any(),
        GateOutcome::Render => children().into_any(),
    }
}
