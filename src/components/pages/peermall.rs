//! Peermall storefront and creation form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::{css, remote_view, set_page_title};
use crate::app::use_auth;
use crate::components::hooks::{FormState, use_remote};
use crate::components::icons as ic;
use crate::components::link::Link;
use crate::components::product::ProductList;
use crate::components::tabs::Tabs;
use crate::config::paths;
use crate::core::error::ApiError;
use crate::core::{ApiClient, Navigate, NavigateOptions, use_navigator};
use crate::models::{AppRoute, Peermall, PeermallDraft, Product, ProductTab};

#[derive(Clone, Debug, PartialEq)]
struct Storefront {
    peermall: Peermall,
    products: Vec<Product>,
}

async fn load_storefront(slug: String) -> Result<Storefront, ApiError> {
    let client = ApiClient::from_session();
    let peermall = client.peermall(&slug).await?;
    let products = client.products(Some(&slug)).await?;
    Ok(Storefront { peermall, products })
}

#[component]
pub fn PeermallPage(#[prop(into)] slug: String) -> impl IntoView {
    set_page_title(&slug);
    let auth = use_auth();
    let state = use_remote(move || load_storefront(slug));
    let selected = RwSignal::new(ProductTab::All);

    let storefront = Memo::new(move |_| state.with(|s| s.ready().cloned()));
    let products = Signal::derive(move || {
        storefront.with(|s| s.as_ref().map(|s| s.products.clone()).unwrap_or_default())
    });
    let user_id = Signal::derive(move || auth.user_id());
    let is_owner = move || {
        let owner = storefront.with(|s| s.as_ref().map(|s| s.peermall.owner_id.clone()));
        owner.is_some() && owner == auth.user_id()
    };

    Effect::new(move |_| {
        if let Some(name) = storefront.with(|s| s.as_ref().map(|s| s.peermall.name.clone())) {
            set_page_title(&name);
        }
    });

    view! {
        <section class=css::page>
            {remote_view(state, move || view! {
                {move || storefront.get().map(|s| view! {
                    <div class=css::storeHeader>
                        {s.peermall.logo_url.map(|src| view! { <img class=css::logo src=src alt="" /> })}
                        <div>
                            <h1 class=css::title>{s.peermall.name}</h1>
                            {s.peermall.description.map(|d| view! { <p class=css::muted>{d}</p> })}
                        </div>
                    </div>
                })}
                <Show when=is_owner>
                    <Link href=AppRoute::CreateProduct.to_path() class=css::secondary>
                        <Icon icon=ic::PLUS />
                        <span>"Add a product"</span>
                    </Link>
                </Show>
                <Tabs tabs=Signal::derive(|| ProductTab::PUBLIC.to_vec()) selected=selected />
                <ProductList products=products tab=selected user_id=user_id />
            })}
        </section>
    }
}

#[component]
pub fn CreatePeermallPage() -> impl IntoView {
    set_page_title("Open a peermall");
    let auth = use_auth();
    let navigator = use_navigator();
    let form = FormState::new();
    let name = RwSignal::new(String::new());
    let slug = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = PeermallDraft {
            slug: slug.get_untracked(),
            name: name.get_untracked(),
            description: Some(description.get_untracked()),
        };
        let draft = match draft.validated() {
            Ok(draft) => draft,
            Err(e) => return form.fail(e),
        };
        if !form.begin() {
            return;
        }
        spawn_local(async move {
            match ApiClient::from_session().create_peermall(&draft).await {
                Ok(created) => {
                    form.finish(None);
                    auth.load_profile();
                    let path = AppRoute::Peermall { slug: created.slug }.to_path();
                    navigator.navigate(&path, NavigateOptions::push());
                }
                Err(e) if e.is_unauthorized() => {
                    auth.sign_out();
                    navigator.navigate(paths::LOGIN, NavigateOptions::replace());
                }
                Err(ApiError::Http { status: 409, .. }) => {
                    form.finish(Some("That address is already taken.".to_string()))
                }
                Err(e) => form.finish(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class=css::narrow>
            <h1 class=css::title>"Open a peermall"</h1>
            <form class=css::form on:submit=on_submit>
                <label class=css::field>
                    <span>"Name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Address"</span>
                    <div class=css::prefixed>
                        <span class=css::muted>"/peermall/"</span>
                        <input
                            type="text"
                            placeholder="my-shop"
                            prop:value=move || slug.get()
                            on:input=move |ev| slug.set(event_target_value(&ev))
                        />
                    </div>
                </label>
                <label class=css::field>
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class=css::primary disabled=move || form.pending.get()>
                    {move || if form.pending.get() { "Creating..." } else { "Create" }}
                </button>
                {move || form.error.get().map(|msg| view! { <p class=css::error>{msg}</p> })}
            </form>
        </section>
    }
}
