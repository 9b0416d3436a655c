//! Authenticated-only gate.

use leptos::prelude::*;

use super::use_token_gate;
use crate::components::loading::LoadingScreen;
use crate::core::{GateOutcome, LocalStorage, use_navigator};

/// Renders `children` only when a session token is stored.
///
/// The first render always shows the loading placeholder. The storage
/// check runs once in an effect after that render; without a token the
/// gate replaces the current history entry with `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let gate = use_token_gate(LocalStorage, use_navigator());

    move || match gate.get().outcome() {
        GateOutcome::Loading => view! { <LoadingScreen /> }.into_any(),
        GateOutcome::Redirect(_) => ().into_any(),
        GateOutcome::Render => children().into_any(),
    }
}
