//! Post form: title and body in, simulated post id out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting logs the draft, spawns the simulated API call and writes the
//! returned id into the shared `PostState`, which reveals the commentary form.
//! "Clear ID" only resets that id; the inputs keep their text.
//!
//! TRADE-OFFS
//! ==========
//! Submits are not de-duplicated or cancelled. Overlapping calls each store
//! their id when they resolve, so the last one to finish wins, and a call
//! still pending after "Clear ID" will set an id again.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::config::AppConfig;
use crate::net::api;
use crate::net::types::{Post, PostDraft};
use crate::state::post::{PostState, use_post};
use crate::state::submit::SubmitState;
use crate::util::form::{FieldSpec, FieldValues, FormError, FormModel, handle_submit};

impl FormModel for PostDraft {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::text("title", "Título"), FieldSpec::text("post", "Post")];

    fn from_values(values: &FieldValues) -> Result<Self, FormError> {
        Ok(Self {
            title: values.field("title")?,
            post: values.field("post")?,
        })
    }
}

/// Post creation form with the saved id heading and loading indicator.
#[component]
pub fn PostForm() -> impl IntoView {
    let post = use_post();
    let config = expect_context::<AppConfig>();
    let values = RwSignal::new(FieldValues::register(PostDraft::FIELDS));
    let submit = RwSignal::new(SubmitState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match values.with_untracked(|v| handle_submit::<PostDraft>(v)) {
            Ok(draft) => draft,
            Err(e) => {
                leptos::logging::warn!("post form: {e}");
                return;
            }
        };
        leptos::logging::log!("{}", draft.log_record());
        submit.update(SubmitState::begin);

        leptos::task::spawn_local(async move {
            let saved = save_post(draft, config.api_latency, post, submit).await;
            leptos::logging::log!("post saved: {}", saved.id);
        });
    };

    view! {
        <Show when=move || post.with(PostState::has_post)>
            <h2 class="is-subtitle">{move || post.with(|p| p.id().to_owned())}</h2>
        </Show>

        <form on:submit=on_submit>
            {PostDraft::FIELDS
                .iter()
                .map(|spec| view! { <FormField spec=*spec values=values/> })
                .collect_view()}

            <div class="field is-grouped">
                <div class="control">
                    <button type="submit" class="button is-link">
                        "Submit"
                    </button>
                </div>
                <div class="control">
                    <button type="button" class="button is-dark" on:click=move |_| clear_saved_post(post)>
                        "Clear ID"
                    </button>
                </div>
            </div>
        </form>

        <Show when=move || submit.with(SubmitState::is_loading)>
            <p class="is-text">"Loading...."</p>
        </Show>
    }
}

/// Wait for the simulated call, store its id and release the pending slot
/// the caller took with `SubmitState::begin`.
pub async fn save_post(
    draft: PostDraft,
    latency: Duration,
    post: RwSignal<PostState>,
    submit: RwSignal<SubmitState>,
) -> Post {
    let response = api::submit_post(latency).await;
    post.update(|p| p.set_id(response.id.clone()));
    submit.update(SubmitState::finish);
    draft.into_post(response.id)
}

/// Reset the shared post id. Form inputs are left untouched.
pub fn clear_saved_post(post: RwSignal<PostState>) {
    post.update(PostState::clear);
}
