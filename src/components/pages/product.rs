//! Product detail and creation pages.

use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::{css, remote_view, set_page_title};
use crate::app::use_auth;
use crate::components::comment::{CommentForm, CommentList};
use crate::components::hooks::{FormState, use_remote};
use crate::components::icons as ic;
use crate::components::link::Link;
use crate::config::paths;
use crate::core::{ApiClient, Navigate, NavigateOptions, use_navigator};
use crate::models::{AppRoute, Comment, ProductDraft, ProductStatus};
use crate::utils::format::{format_date_iso, format_price};
use crate::utils::validate_product_url;

// ============================================================================
// Detail
// ============================================================================

#[component]
pub fn ProductDetailPage(#[prop(into)] id: String) -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();
    let product_id = StoredValue::new(id);

    let product = use_remote(move || async move {
        ApiClient::from_session()
            .product(&product_id.get_value())
            .await
    });
    let comments = use_remote(move || async move {
        ApiClient::from_session()
            .comments(&product_id.get_value())
            .await
    });
    let action_error = RwSignal::new(None::<String>);

    let loaded = Memo::new(move |_| product.with(|s| s.ready().cloned()));
    let is_owner = move || {
        let owner = loaded.with(|p| p.as_ref().map(|p| p.owner_id.clone()));
        owner.is_some() && owner == auth.user_id()
    };

    Effect::new(move |_| {
        if let Some(name) = loaded.with(|p| p.as_ref().map(|p| p.name.clone())) {
            set_page_title(&name);
        }
    });

    let on_delete_product = move |_| {
        let Some(slug) = loaded.with_untracked(|p| p.as_ref().map(|p| p.peermall_slug.clone()))
        else {
            return;
        };
        let id = product_id.get_value();
        spawn_local(async move {
            match ApiClient::from_session().delete_product(&id).await {
                Ok(()) => {
                    let path = AppRoute::Peermall { slug }.to_path();
                    navigator.navigate(&path, NavigateOptions::replace());
                }
                Err(e) if e.is_unauthorized() => {
                    auth.sign_out();
                    navigator.navigate(paths::LOGIN, NavigateOptions::replace());
                }
                Err(e) => {
                    let _ = action_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    let on_toggle_status = move |_| {
        let Some(current) = loaded.get_untracked() else {
            return;
        };
        let draft = ProductDraft::with_status(&current, current.status.toggled());
        spawn_local(async move {
            match ApiClient::from_session().update_product(&current.id, &draft).await {
                Ok(updated) => {
                    let _ = action_error.try_set(None);
                    let _ = product.try_update(|s| s.update_ready(|p| *p = updated));
                }
                Err(e) if e.is_unauthorized() => {
                    auth.sign_out();
                    navigator.navigate(paths::LOGIN, NavigateOptions::replace());
                }
                Err(e) => {
                    let _ = action_error.try_set(Some(e.to_string()));
                }
            }
        });
    };
    let is_sold_out =
        move || loaded.with(|p| p.as_ref().is_some_and(|p| p.status == ProductStatus::SoldOut));

    let on_posted = Callback::new(move |comment: Comment| {
        comments.update(|s| s.update_ready(|list| list.push(comment)));
    });

    let on_delete_comment = Callback::new(move |comment_id: String| {
        spawn_local(async move {
            match ApiClient::from_session().delete_comment(&comment_id).await {
                Ok(()) => {
                    let _ = comments
                        .try_update(|s| s.update_ready(|list| list.retain(|c| c.id != comment_id)));
                }
                Err(e) => {
                    logging::warn!("could not delete comment {comment_id}: {e}");
                    let _ = action_error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    let comment_list = Signal::derive(move || {
        comments.with(|s| s.ready().cloned().unwrap_or_default())
    });
    let viewer_id = Signal::derive(move || auth.user_id());

    view! {
        <section class=css::page>
            {remote_view(product, move || {
                loaded.get().map(|p| {
                    let peermall_href = AppRoute::Peermall { slug: p.peermall_slug.clone() }.to_path();
                    let alt = p.name.clone();
                    view! {
                        <article class=css::detail>
                            <div class=css::detailImage>
                                {match p.image_url {
                                    Some(src) => view! { <img src=src alt=alt /> }.into_any(),
                                    None => view! { <div class=css::placeholder></div> }.into_any(),
                                }}
                            </div>
                            <div class=css::detailBody>
                                <Link href=peermall_href class=css::muted>{p.peermall_slug}</Link>
                                <h1 class=css::title>{p.name}</h1>
                                <p class=css::price>{format_price(p.price)}</p>
                                {(p.status == ProductStatus::SoldOut)
                                    .then(|| view! { <span class=css::badge>"Sold out"</span> })}
                                {p.description.map(|d| view! { <p class=css::description>{d}</p> })}
                                {p.source_url.map(|href| view! {
                                    <a class=css::source href=href target="_blank" rel="noopener noreferrer">
                                        <Icon icon=ic::LINK />
                                        <span>"Original page"</span>
                                    </a>
                                })}
                                {p.created_at.map(|ts| view! {
                                    <p class=css::muted>"Listed " {format_date_iso(ts)}</p>
                                })}
                                <Show when=is_owner>
                                    <div class=css::ownerActions>
                                        <button class=css::secondary on:click=on_toggle_status>
                                            {move || if is_sold_out() { "Back on sale" } else { "Mark sold out" }}
                                        </button>
                                        <button class=css::danger on:click=on_delete_product>
                                            <Icon icon=ic::TRASH />
                                            <span>"Delete product"</span>
                                        </button>
                                    </div>
                                </Show>
                                {move || action_error.get().map(|msg| view! { <p class=css::error>{msg}</p> })}
                            </div>
                        </article>
                    }
                })
            })}

            <h2 class=css::subtitle>
                <Icon icon=ic::COMMENT />
                <span>"Comments"</span>
            </h2>
            {remote_view(comments, move || view! {
                <CommentList comments=comment_list viewer_id=viewer_id on_delete=on_delete_comment />
            })}
            <CommentForm product_id=product_id.get_value() on_posted=on_posted />
        </section>
    }
}

// ============================================================================
// Create
// ============================================================================

/// Empty form fields count as "not set" so OG data can fill them.
fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
pub fn CreateProductPage() -> impl IntoView {
    set_page_title("New product");
    let auth = use_auth();
    let navigator = use_navigator();
    let form = FormState::new();
    let fetching = RwSignal::new(false);

    let source_url = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let peermall = RwSignal::new(String::new());

    let peermalls = Signal::derive(move || {
        auth.user
            .with(|u| u.as_ref().map(|u| u.peermalls.clone()).unwrap_or_default())
    });

    // Preselect the first owned peermall once the profile arrives.
    Effect::new(move |_| {
        if peermall.get_untracked().is_empty()
            && let Some(first) = peermalls.with(|p| p.first().cloned())
        {
            peermall.set(first);
        }
    });

    let current_draft = move || ProductDraft {
        name: name.get_untracked(),
        description: non_blank(description.get_untracked()),
        price: ProductDraft::parse_price(&price.get_untracked()).unwrap_or_default(),
        image_url: non_blank(image_url.get_untracked()),
        source_url: non_blank(source_url.get_untracked()),
        peermall_slug: peermall.get_untracked(),
        status: None,
    };

    let on_fetch = move |_| {
        let url = match validate_product_url(&source_url.get_untracked()) {
            Ok(url) => url,
            Err(e) => return form.fail(e),
        };
        if fetching.get_untracked() {
            return;
        }
        fetching.set(true);
        form.error.set(None);
        spawn_local(async move {
            match ApiClient::from_session().parse_og(&url).await {
                Ok(meta) => {
                    let mut draft = current_draft();
                    meta.prefill(&mut draft);
                    let _ = name.try_set(draft.name);
                    let _ = description.try_set(draft.description.unwrap_or_default());
                    let _ = image_url.try_set(draft.image_url.unwrap_or_default());
                    if draft.price > 0 {
                        let _ = price.try_set(draft.price.to_string());
                    }
                }
                Err(e) => {
                    let _ = form.error.try_set(Some(format!("Could not read that page: {e}")));
                }
            }
            let _ = fetching.try_set(false);
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let price = match ProductDraft::parse_price(&price.get_untracked()) {
            Ok(price) => price,
            Err(e) => return form.fail(e),
        };
        let draft = match (ProductDraft {
            price,
            ..current_draft()
        })
        .validated()
        {
            Ok(draft) => draft,
            Err(e) => return form.fail(e),
        };
        if !form.begin() {
            return;
        }
        spawn_local(async move {
            match ApiClient::from_session().create_product(&draft).await {
                Ok(created) => {
                    form.finish(None);
                    let path = AppRoute::Product { id: created.id }.to_path();
                    navigator.navigate(&path, NavigateOptions::push());
                }
                Err(e) if e.is_unauthorized() => {
                    auth.sign_out();
                    navigator.navigate(paths::LOGIN, NavigateOptions::replace());
                }
                Err(e) => form.finish(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class=css::narrow>
            <h1 class=css::title>"New product"</h1>
            <Show
                when=move || !peermalls.with(|p| p.is_empty())
                fallback=|| view! {
                    <p class=css::muted>
                        "You need a peermall before listing products. "
                        <Link href=AppRoute::CreatePeermall.to_path()>"Open one"</Link>
                    </p>
                }
            >
                <form class=css::form on:submit=on_submit>
                    <label class=css::field>
                        <span>"Product page URL"</span>
                        <div class=css::prefixed>
                            <input
                                type="url"
                                placeholder="https://"
                                prop:value=move || source_url.get()
                                on:input=move |ev| source_url.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class=css::secondary
                                disabled=move || fetching.get()
                                on:click=on_fetch
                            >
                                <Icon icon=ic::LINK />
                                <span>{move || if fetching.get() { "Reading..." } else { "Fill from page" }}</span>
                            </button>
                        </div>
                    </label>
                    <label class=css::field>
                        <span>"Peermall"</span>
                        <select
                            prop:value=move || peermall.get()
                            on:change=move |ev| peermall.set(event_target_value(&ev))
                        >
                            <For
                                each=move || peermalls.get()
                                key=|slug| slug.clone()
                                children=|slug| {
                                    let label = slug.clone();
                                    view! { <option value=slug>{label}</option> }
                                }
                            />
                        </select>
                    </label>
                    <label class=css::field>
                        <span>"Name"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class=css::field>
                        <span>"Price (won)"</span>
                        <input
                            type="text"
                            inputmode="numeric"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                    <label class=css::field>
                        <span>"Image URL"</span>
                        <input
                            type="url"
                            prop:value=move || image_url.get()
                            on:input=move |ev| image_url.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        let src = image_url.get();
                        (!src.trim().is_empty())
                            .then(|| view! { <img class=css::preview src=src alt="" /> })
                    }}
                    <label class=css::field>
                        <span>"Description"</span>
                        <textarea
                            rows="4"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" class=css::primary disabled=move || form.pending.get()>
                        {move || if form.pending.get() { "Saving..." } else { "List product" }}
                    </button>
                    {move || form.error.get().map(|msg| view! { <p class=css::error>{msg}</p> })}
                </form>
            </Show>
        </section>
    }
}
