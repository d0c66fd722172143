//! Post page: the post form, then the commentary form once a post is saved.

use leptos::prelude::*;

use crate::components::{commentary_form::CommentaryForm, post_form::PostForm};
use crate::state::post::{PostState, use_post};

/// Container for both forms.
///
/// The commentary form is mounted only while the shared post state holds an
/// id, so clearing the id also drops whatever was typed into it.
#[component]
pub fn PostPage() -> impl IntoView {
    let post = use_post();

    view! {
        <div class="container">
            <div class="box mb-4">
                <PostForm/>
            </div>

            <Show when=move || post.with(PostState::has_post)>
                <div class="box">
                    <CommentaryForm/>
                </div>
            </Show>
        </div>
    }
}
