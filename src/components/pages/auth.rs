//! Login and signup forms.
//!
//! Both pages sit behind `GuestOnly`: once [`AuthContext::sign_in`]
//! publishes the new session the gate moves the visitor away.
//!
//! [`AuthContext::sign_in`]: crate::app::AuthContext::sign_in

use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{css, set_page_title};
use crate::app::{AuthContext, use_auth};
use crate::components::hooks::FormState;
use crate::components::link::Link;
use crate::config::paths;
use crate::core::ApiClient;
use crate::core::error::ApiError;
use crate::models::{AuthToken, Credentials, SignupRequest};

/// Store the issued token and report the outcome on `form`.
fn complete_sign_in(auth: AuthContext, form: FormState, result: Result<AuthToken, ApiError>) {
    match result {
        Ok(issued) => match auth.sign_in(&issued.token) {
            Ok(()) => form.finish(None),
            Err(e) => {
                logging::warn!("could not persist session: {e}");
                form.finish(Some(e.to_string()));
            }
        },
        Err(ApiError::Unauthorized) => {
            form.finish(Some("Invalid email or password.".to_string()))
        }
        Err(e) => form.finish(Some(e.to_string())),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    set_page_title("Sign in");
    let auth = use_auth();
    let form = FormState::new();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return form.fail("Enter your email and password.");
        }
        if !form.begin() {
            return;
        }
        spawn_local(async move {
            let result = ApiClient::default().login(&credentials).await;
            complete_sign_in(auth, form, result);
        });
    };

    view! {
        <section class=css::narrow>
            <h1 class=css::title>"Sign in"</h1>
            <form class=css::form on:submit=on_submit>
                <label class=css::field>
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class=css::primary disabled=move || form.pending.get()>
                    {move || if form.pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                {move || form.error.get().map(|msg| view! { <p class=css::error>{msg}</p> })}
            </form>
            <p class=css::muted>
                "No account yet? " <Link href=paths::SIGNUP>"Sign up"</Link>
            </p>
        </section>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    set_page_title("Sign up");
    let auth = use_auth();
    let form = FormState::new();
    let email = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = SignupRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            nickname: nickname.get_untracked().trim().to_string(),
        };
        if let Err(e) = request.validate(&confirm.get_untracked()) {
            return form.fail(e);
        }
        if !form.begin() {
            return;
        }
        spawn_local(async move {
            let result = ApiClient::default().signup(&request).await;
            complete_sign_in(auth, form, result);
        });
    };

    view! {
        <section class=css::narrow>
            <h1 class=css::title>"Create an account"</h1>
            <form class=css::form on:submit=on_submit>
                <label class=css::field>
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Nickname"</span>
                    <input
                        type="text"
                        autocomplete="nickname"
                        prop:value=move || nickname.get()
                        on:input=move |ev| nickname.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Confirm password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class=css::primary disabled=move || form.pending.get()>
                    {move || if form.pending.get() { "Creating account..." } else { "Sign up" }}
                </button>
                {move || form.error.get().map(|msg| view! { <p class=css::error>{msg}</p> })}
            </form>
            <p class=css::muted>
                "Already registered? " <Link href=paths::LOGIN>"Sign in"</Link>
            </p>
        </section>
    }
}
