//! Account overview for the signed-in user.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{css, remote_view, set_page_title};
use crate::app::use_auth;
use crate::components::hooks::use_remote;
use crate::components::icons as ic;
use crate::components::link::Link;
use crate::components::product::ProductList;
use crate::config::paths;
use crate::core::error::ApiError;
use crate::core::{ApiClient, Navigate, NavigateOptions, use_navigator};
use crate::models::{AppRoute, LoadState, Product, ProductTab, Sponsor, UserProfile};

#[derive(Clone, Debug, PartialEq)]
struct Overview {
    user: UserProfile,
    sponsors: Vec<Sponsor>,
    products: Vec<Product>,
}

async fn load_overview() -> Result<Overview, ApiError> {
    let client = ApiClient::from_session();
    let user = client.me().await?;
    let sponsors = client.sponsors(&user.id).await?;
    let products = client.products(None).await?;
    Ok(Overview {
        user,
        sponsors,
        products,
    })
}

#[component]
pub fn MyPage() -> impl IntoView {
    set_page_title("My page");
    let auth = use_auth();
    let navigator = use_navigator();
    let state = use_remote(load_overview);

    // A token the backend no longer accepts ends the session here.
    Effect::new(move |_| {
        if state.with(|s| matches!(s, LoadState::Failed(e) if e.is_unauthorized())) {
            auth.sign_out();
            navigator.navigate(paths::LOGIN, NavigateOptions::replace());
        }
    });

    let overview = Memo::new(move |_| state.with(|s| s.ready().cloned()));
    let user = move || overview.with(|o| o.as_ref().map(|o| o.user.clone()));
    let sponsors = move || {
        overview.with(|o| o.as_ref().map(|o| o.sponsors.clone()).unwrap_or_default())
    };
    let products = Signal::derive(move || {
        overview.with(|o| o.as_ref().map(|o| o.products.clone()).unwrap_or_default())
    });
    let user_id = Signal::derive(move || overview.with(|o| o.as_ref().map(|o| o.user.id.clone())));

    let sign_out = move |_| {
        auth.sign_out();
        navigator.navigate(paths::HOME, NavigateOptions::replace());
    };

    view! {
        <section class=css::page>
            {remote_view(state, move || view! {
                {move || user().map(|user| view! {
                    <div class=css::profile>
                        <Icon icon=ic::USER />
                        <div>
                            <h1 class=css::title>{user.display_name().to_string()}</h1>
                            <p class=css::muted>{user.email.clone()}</p>
                        </div>
                        <button class=css::secondary on:click=sign_out>
                            <Icon icon=ic::SIGN_OUT />
                            <span>"Sign out"</span>
                        </button>
                    </div>

                    <h2 class=css::subtitle>"My peermalls"</h2>
                    <ul class=css::chips>
                        {user.peermalls.clone().into_iter().map(|slug| {
                            let href = AppRoute::Peermall { slug: slug.clone() }.to_path();
                            view! {
                                <li><Link href=href class=css::chip>{slug.clone()}</Link></li>
                            }
                        }).collect_view()}
                        <li>
                            <Link href=AppRoute::CreatePeermall.to_path() class=css::chip>
                                <Icon icon=ic::PLUS />
                                <span>"Open a peermall"</span>
                            </Link>
                        </li>
                    </ul>
                })}

                <h2 class=css::subtitle>"Sponsors"</h2>
                <Show
                    when=move || !sponsors().is_empty()
                    fallback=|| view! { <p class=css::muted>"No sponsors yet."</p> }
                >
                    <ul class=css::sponsors>
                        <For
                            each=sponsors
                            key=|sponsor| sponsor.id.clone()
                            children=|sponsor| view! {
                                <li class=css::sponsor>
                                    {sponsor.logo_url.map(|src| view! { <img src=src alt="" /> })}
                                    {match sponsor.link_url {
                                        Some(href) => view! {
                                            <a href=href target="_blank" rel="noopener noreferrer">
                                                {sponsor.name}
                                            </a>
                                        }.into_any(),
                                        None => view! { <span>{sponsor.name}</span> }.into_any(),
                                    }}
                                </li>
                            }
                        />
                    </ul>
                </Show>

                <h2 class=css::subtitle>"My products"</h2>
                <ProductList products=products tab=ProductTab::Mine user_id=user_id />
            })}
        </section>
    }
}
