//! Tab strip for product lists.

use leptos::prelude::*;

use crate::models::ProductTab;

stylance::import_crate_style!(css, "src/components/tabs.module.css");

/// Horizontal tab strip bound to `selected`.
#[component]
pub fn Tabs(#[prop(into)] tabs: Signal<Vec<ProductTab>>, selected: RwSignal<ProductTab>) -> impl IntoView {
    view! {
        <div class=css::strip role="tablist">
            <For
                each=move || tabs.get()
                key=|tab| *tab
                children=move |tab| {
                    let is_active = move || selected.get() == tab;
                    view! {
                        <button
                            role="tab"
                            class=move || if is_active() { css::tabActive } else { css::tab }
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| selected.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                }
            />
        </div>
    }
}
