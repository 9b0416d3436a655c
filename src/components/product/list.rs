//! Tab-filtered product grid.

use leptos::prelude::*;

use super::card::ProductCard;
use crate::models::{Product, ProductTab};

stylance::import_crate_style!(css, "src/components/product/product.module.css");

/// Grid of the products matching the active tab.
///
/// `user_id` is only needed for [`ProductTab::Mine`].
#[component]
pub fn ProductList(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] tab: Signal<ProductTab>,
    #[prop(into)] user_id: Signal<Option<String>>,
) -> impl IntoView {
    let visible = Memo::new(move |_| {
        let tab = tab.get();
        let user_id = user_id.get();
        products.with(|all| {
            tab.filter(all, user_id.as_deref())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Show
            when=move || visible.with(|v| !v.is_empty())
            fallback=|| view! { <p class=css::empty>"No products here yet."</p> }
        >
            <ul class=css::grid>
                <For
                    each=move || visible.get()
                    key=|product| product.id.clone()
                    children=|product| view! { <ProductCard product=product /> }
                />
            </ul>
        </Show>
    }
}
