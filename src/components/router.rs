//! Application router component.
//!
//! Handles path-based routing over the History API without leptos_router.
//!
//! # Architecture
//!
//! - **Route signal is the source of truth**: [`HistoryNavigator`] writes it on
//!   every in-app navigation, `popstate` re-reads it on back/forward
//! - **Gates wrap pages, not the app**: guest pages sit in [`GuestOnly`],
//!   account pages in [`RequireAuth`]; everything else is public
//! - **Header never re-renders on navigation**: only the page slot is swapped
//!
//! [`HistoryNavigator`]: crate::core::HistoryNavigator

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::guard::{GuestOnly, RequireAuth};
use crate::components::pages::{
    CreatePeermallPage, CreateProductPage, HomePage, LoginPage, MyPage, NotFoundPage,
    PeermallPage, ProductDetailPage, SignupPage,
};
use crate::core::use_navigator;
use crate::models::AppRoute;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/` → product feed
/// - `/login`, `/signup` → guest only
/// - `/mypage`, `/peermall/new`, `/products/new` → signed-in only
/// - `/peermall/{slug}`, `/products/{id}` → public
#[component]
pub fn AppRouter() -> impl IntoView {
    let navigator = use_navigator();

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            navigator.sync_from_location();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Re-navigating to the same path does not remount the page.
    let route = Memo::new(move |_| navigator.route().get());

    move || render_route(route.get())
}

/// Gate a route's page is wrapped in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gate {
    Public,
    GuestOnly,
    RequireAuth,
}

/// Pick the gate from the route's access rule.
fn gate_for(route: &AppRoute) -> Gate {
    if route.requires_auth() {
        Gate::RequireAuth
    } else if route.guest_only() {
        Gate::GuestOnly
    } else {
        Gate::Public
    }
}

/// Page for `route`, wrapped in the gate its access rule requires.
fn render_route(route: AppRoute) -> AnyView {
    match gate_for(&route) {
        Gate::RequireAuth => view! { <RequireAuth>{page(route.clone())}</RequireAuth> }.into_any(),
        Gate::GuestOnly => view! { <GuestOnly>{page(route.clone())}</GuestOnly> }.into_any(),
        Gate::Public => page(route),
    }
}

/// Ungated page component for `route`.
fn page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::MyPage => view! { <MyPage /> }.into_any(),
        AppRoute::CreatePeermall => view! { <CreatePeermallPage /> }.into_any(),
        AppRoute::CreateProduct => view! { <CreateProductPage /> }.into_any(),
        AppRoute::Peermall { slug } => view! { <PeermallPage slug=slug /> }.into_any(),
        AppRoute::Product { id } => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
    }
}
