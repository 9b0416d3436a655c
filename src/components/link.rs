//! In-app link.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::{Navigate, NavigateOptions, use_navigator};

/// Anchor that navigates through the History API instead of reloading.
///
/// Modified clicks (ctrl/cmd/shift, middle button) fall through to the
/// browser so "open in new tab" keeps working.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let navigator = use_navigator();
    let target = href.clone();

    let on_click = move |ev: MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        navigator.navigate(&target, NavigateOptions::push());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
