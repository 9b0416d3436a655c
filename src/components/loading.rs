//! Full-viewport loading indicators.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/loading.module.css");

/// Centered textual placeholder.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class=css::screen role="status" aria-live="polite">
            <p class=css::text>"Loading..."</p>
        </div>
    }
}

/// Centered spinner.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class=css::screen role="status" aria-label="Loading">
            <div class=css::spinner></div>
        </div>
    }
}
