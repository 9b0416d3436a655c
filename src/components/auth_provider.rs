//! Authentication status provider.

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::core::auth::SessionStrategy;

/// Provides an [`AuthContext`] to `children` and starts session resolution.
///
/// Defaults to the configured strategy when `strategy` is not given.
#[component]
pub fn AuthProvider(
    #[prop(optional)] strategy: Option<SessionStrategy>,
    children: Children,
) -> impl IntoView {
    let ctx = strategy.map(AuthContext::new).unwrap_or_default();
    provide_context(ctx);

    // Resolution runs after the first render so consumers see the loading
    // state before any outcome.
    Effect::new(move |_| ctx.refresh());

    children()
}
