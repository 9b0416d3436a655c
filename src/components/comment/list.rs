//! Comment thread.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Comment;
use crate::utils::format::format_date_iso;

stylance::import_crate_style!(css, "src/components/comment/comment.module.css");

/// Comments in the order the backend returned them.
///
/// `on_delete` is offered on comments written by `viewer_id`.
#[component]
pub fn CommentList(
    #[prop(into)] comments: Signal<Vec<Comment>>,
    #[prop(into)] viewer_id: Signal<Option<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || comments.with(|c| !c.is_empty())
            fallback=|| view! { <p class=css::empty>"No comments yet. Be the first!"</p> }
        >
            <ul class=css::thread>
                <For
                    each=move || comments.get()
                    key=|comment| comment.id.clone()
                    children=move |comment| {
                        let id = comment.id.clone();
                        let author_id = comment.author_id.clone();
                        let is_mine = move || viewer_id.with(|v| v.as_deref() == Some(author_id.as_str()));
                        view! {
                            <li class=css::item>
                                <div class=css::itemHeader>
                                    <span class=css::author>{comment.author_nickname}</span>
                                    <span class=css::date>{format_date_iso(comment.created_at)}</span>
                                    <Show when=is_mine>
                                        <button
                                            class=css::delete
                                            title="Delete comment"
                                            on:click={
                                                let id = id.clone();
                                                move |_| on_delete.run(id.clone())
                                            }
                                        >
                                            <Icon icon=ic::TRASH />
                                        </button>
                                    </Show>
                                </div>
                                <p class=css::content>{comment.content}</p>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
