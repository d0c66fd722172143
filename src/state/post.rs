//! Shared post state and its context provider.
//!
//! DESIGN
//! ======
//! The current post id lives in a single `RwSignal<PostState>` created by
//! `PostProvider`, so its lifetime is the provider's reactive owner rather
//! than the page. Descendants reach it through `use_post`.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use leptos::prelude::*;

/// Id of the post saved by the post form.
///
/// An empty id means no submission has resolved since the last clear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostState {
    pub id: String,
}

impl PostState {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the id. No validation; an empty id clears the post.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn clear(&mut self) {
        self.id.clear();
    }

    /// Whether a post is saved. Gates the commentary form.
    pub fn has_post(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Provides a fresh `RwSignal<PostState>` to `children`.
#[component]
pub fn PostProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(PostState::default()));
    children()
}

/// Shared post state for the nearest enclosing `PostProvider`.
///
/// Must be called inside a `PostProvider`; panics otherwise.
pub fn use_post() -> RwSignal<PostState> {
    expect_context::<RwSignal<PostState>>()
}
