//! Top navigation bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::icons as ic;
use super::link::Link;
use crate::app::use_auth;
use crate::config::{APP_NAME, paths};
use crate::core::{Navigate, NavigateOptions, use_navigator};
use crate::models::{AppRoute, AuthStatus};

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Header with the brand link and session actions.
///
/// Shows nothing in the session area while the status is unknown.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();

    let display_name = Signal::derive(move || {
        auth.user.with(|u| {
            u.as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_else(|| "My page".to_string())
        })
    });

    let sign_out = move |_| {
        auth.sign_out();
        navigator.navigate(paths::HOME, NavigateOptions::replace());
    };

    view! {
        <header class=css::bar>
            <Link href=paths::HOME class=css::brand>
                <Icon icon=ic::SHOP />
                <span>{APP_NAME}</span>
            </Link>
            <nav class=css::actions>
                {move || match auth.snapshot().status() {
                    AuthStatus::Unknown => ().into_any(),
                    AuthStatus::Authenticated => {
                        view! {
                            <Link href=AppRoute::CreateProduct.to_path() class=css::action>
                                <Icon icon=ic::PLUS />
                                <span>"New product"</span>
                            </Link>
                            <Link href=AppRoute::MyPage.to_path() class=css::action>
                                <Icon icon=ic::USER />
                                <span>{display_name}</span>
                            </Link>
                            <button class=css::action on:click=sign_out>
                                <Icon icon=ic::SIGN_OUT />
                                <span>"Sign out"</span>
                            </button>
                        }
                            .into_any()
                    }
                    AuthStatus::Unauthenticated => {
                        view! {
                            <Link href=paths::LOGIN class=css::action>
                                <Icon icon=ic::SIGN_IN />
                                <span>"Sign in"</span>
                            </Link>
                            <Link href=paths::SIGNUP class=css::actionPrimary>
                                "Sign up"
                            </Link>
                        }
                            .into_any()
                    }
                }}
            </nav>
        </header>
    }
}
