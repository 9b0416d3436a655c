//! Single product tile.

use leptos::prelude::*;

use crate::components::link::Link;
use crate::models::{AppRoute, Product, ProductStatus};
use crate::utils::format::{format_price, truncate};

stylance::import_crate_style!(css, "src/components/product/product.module.css");

const NAME_MAX_CHARS: usize = 40;

fn status_badge(status: ProductStatus) -> Option<&'static str> {
    match status {
        ProductStatus::OnSale => None,
        ProductStatus::SoldOut => Some("Sold out"),
        ProductStatus::Hidden => Some("Hidden"),
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = AppRoute::Product {
        id: product.id.clone(),
    }
    .to_path();
    let name = truncate(&product.name, NAME_MAX_CHARS);
    let price = format_price(product.price);
    let badge = status_badge(product.status);

    view! {
        <li class=css::card>
            <Link href=href class=css::cardLink>
                {match product.image_url {
                    Some(src) => view! { <img class=css::thumb src=src alt=product.name.clone() /> }.into_any(),
                    None => view! { <div class=css::thumbEmpty></div> }.into_any(),
                }}
                <div class=css::meta>
                    <span class=css::name>{name}</span>
                    <span class=css::price>{price}</span>
                    {badge.map(|label| view! { <span class=css::badge>{label}</span> })}
                </div>
            </Link>
        </li>
    }
}
