//! Page components, one per [`AppRoute`](crate::models::AppRoute).
//!
//! Pages fetch their own data through [`use_remote`](super::hooks::use_remote)
//! and render [`remote_view`] while it arrives.

mod auth;
mod home;
mod my_page;
mod not_found;
mod peermall;
mod product;

pub use auth::{LoginPage, SignupPage};
pub use home::HomePage;
pub use my_page::MyPage;
pub use not_found::NotFoundPage;
pub use peermall::{CreatePeermallPage, PeermallPage};
pub use product::{CreateProductPage, ProductDetailPage};

use leptos::prelude::*;

use crate::components::loading::Spinner;
use crate::config::APP_NAME;
use crate::models::LoadState;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Spinner, error notice or `ready()` depending on `state`.
///
/// Only re-renders when the load phase changes, so `ready` can read the
/// loaded value through its own signals.
pub(crate) fn remote_view<T, V, F>(state: RwSignal<LoadState<T>>, ready: F) -> impl IntoView
where
    T: Send + Sync + 'static,
    V: IntoView + 'static,
    F: Fn() -> V + Send + Sync + 'static,
{
    let phase = Memo::new(move |_| {
        state.with(|s| match s {
            LoadState::Loading => None,
            LoadState::Ready(_) => Some(Ok(())),
            LoadState::Failed(e) => Some(Err(e.to_string())),
        })
    });

    move || match phase.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(message)) => view! { <p class=css::error>{message}</p> }.into_any(),
        Some(Ok(())) => ready().into_any(),
    }
}

/// Set the document title to `"{page} | peermall"`.
pub(crate) fn set_page_title(page: &str) {
    dom::set_title(&format!("{} | {}", page, APP_NAME));
}
