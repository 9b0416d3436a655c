use leptos::prelude::*;

use super::{css, set_page_title};
use crate::components::link::Link;
use crate::config::paths;

#[component]
pub fn NotFoundPage(#[prop(into)] path: String) -> impl IntoView {
    set_page_title("Not found");

    view! {
        <section class=css::page>
            <h1 class=css::title>"Page not found"</h1>
            <p class=css::muted>"Nothing lives at " <code>{path}</code> "."</p>
            <Link href=paths::HOME>"Back to the feed"</Link>
        </section>
    }
}
