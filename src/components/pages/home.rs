//! Product feed.

use leptos::prelude::*;

use super::{css, remote_view};
use crate::app::use_auth;
use crate::components::hooks::use_remote;
use crate::components::product::ProductList;
use crate::components::tabs::Tabs;
use crate::config::APP_NAME;
use crate::core::ApiClient;
use crate::models::ProductTab;
use crate::utils::dom;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    dom::set_title(APP_NAME);

    let state = use_remote(|| async move { ApiClient::from_session().products(None).await });
    let selected = RwSignal::new(ProductTab::All);

    let tabs = Signal::derive(move || {
        if auth.is_authenticated() {
            ProductTab::SIGNED_IN.to_vec()
        } else {
            ProductTab::PUBLIC.to_vec()
        }
    });

    // The "Mine" tab disappears on sign-out.
    Effect::new(move |_| {
        if !auth.is_authenticated() && selected.get_untracked() == ProductTab::Mine {
            selected.set(ProductTab::All);
        }
    });

    let products = Signal::derive(move || state.with(|s| s.ready().cloned().unwrap_or_default()));
    let user_id = Signal::derive(move || auth.user_id());

    view! {
        <section class=css::page>
            <h1 class=css::title>"Latest products"</h1>
            <Tabs tabs=tabs selected=selected />
            {remote_view(state, move || view! {
                <ProductList products=products tab=selected user_id=user_id />
            })}
        </section>
    }
}
