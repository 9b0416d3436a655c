//! Comment composer.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::use_auth;
use crate::components::hooks::FormState;
use crate::components::icons as ic;
use crate::components::link::Link;
use crate::config::paths;
use crate::core::ApiClient;
use crate::models::{Comment, CommentDraft, remaining_chars};

stylance::import_crate_style!(css, "src/components/comment/comment.module.css");

/// Form for posting a comment on `product_id`.
///
/// Anonymous visitors get a sign-in link instead. A rejected token signs
/// the visitor out.
#[component]
pub fn CommentForm(
    #[prop(into)] product_id: String,
    on_posted: Callback<Comment>,
) -> impl IntoView {
    let auth = use_auth();
    let content = RwSignal::new(String::new());
    let form = FormState::new();
    let product_id = StoredValue::new(product_id);

    let remaining = Signal::derive(move || content.with(|c| remaining_chars(c)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match CommentDraft::new(&content.get_untracked()) {
            Ok(draft) => draft,
            Err(e) => return form.fail(e),
        };
        if !form.begin() {
            return;
        }

        let product_id = product_id.get_value();
        spawn_local(async move {
            match ApiClient::from_session().post_comment(&product_id, &draft).await {
                Ok(comment) => {
                    let _ = content.try_set(String::new());
                    form.finish(None);
                    on_posted.run(comment);
                }
                Err(e) if e.is_unauthorized() => {
                    auth.sign_out();
                    form.finish(Some("Your session has expired. Please sign in again.".to_string()));
                }
                Err(e) => form.finish(Some(e.to_string())),
            }
        });
    };

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! {
                <p class=css::signIn>
                    <Link href=paths::LOGIN>"Sign in"</Link>
                    " to leave a comment."
                </p>
            }
        >
            <form class=css::form on:submit=on_submit>
                <textarea
                    class=css::input
                    placeholder="Write a comment"
                    rows="3"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <div class=css::formFooter>
                    <span class=move || if remaining.get() < 0 { css::counterOver } else { css::counter }>
                        {remaining}
                    </span>
                    <button type="submit" class=css::submit disabled=move || form.pending.get()>
                        <Icon icon=ic::COMMENT />
                        <span>{move || if form.pending.get() { "Posting..." } else { "Post" }}</span>
                    </button>
                </div>
                {move || form.error.get().map(|msg| view! { <p class=css::error>{msg}</p> })}
            </form>
        </Show>
    }
}
