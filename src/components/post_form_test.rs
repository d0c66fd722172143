use super::*;

fn draft(title: &str, post: &str) -> PostDraft {
    PostDraft {
        title: title.to_owned(),
        post: post.to_owned(),
    }
}

// =============================================================
// Field registration
// =============================================================

#[test]
fn post_draft_registers_title_and_post() {
    let names: Vec<_> = PostDraft::FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, ["title", "post"]);
}

#[test]
fn post_draft_collects_registered_values() {
    let mut values = FieldValues::register(PostDraft::FIELDS);
    values.set("title", "Hello");
    values.set("post", "World");
    assert_eq!(handle_submit::<PostDraft>(&values), Ok(draft("Hello", "World")));
}

#[test]
fn post_draft_fails_without_registration() {
    let values = FieldValues::default();
    assert_eq!(
        handle_submit::<PostDraft>(&values),
        Err(FormError::Unregistered("title"))
    );
}

// =============================================================
// save_post
// =============================================================

#[tokio::test(start_paused = true)]
async fn save_post_sets_id_after_latency() {
    let post = RwSignal::new(PostState::default());
    let submit = RwSignal::new(SubmitState::default());
    submit.update(SubmitState::begin);

    let mut pending = std::pin::pin!(save_post(draft("Hello", "World"), api::SIMULATED_LATENCY, post, submit));
    let early = tokio::time::timeout(Duration::from_millis(799), &mut pending).await;
    assert!(early.is_err());
    assert!(!post.with_untracked(PostState::has_post));
    assert!(submit.with_untracked(SubmitState::is_loading));

    let saved = pending.await;
    assert!(post.with_untracked(PostState::has_post));
    assert_eq!(post.with_untracked(|p| p.id().to_owned()), saved.id);
    assert_eq!(saved.title, "Hello");
    assert_eq!(saved.post, "World");
    assert!(!submit.with_untracked(SubmitState::is_loading));
}

#[tokio::test(start_paused = true)]
async fn overlapping_saves_last_resolution_wins() {
    let post = RwSignal::new(PostState::default());
    let submit = RwSignal::new(SubmitState::default());
    submit.update(SubmitState::begin);
    submit.update(SubmitState::begin);

    let (slow, fast) = tokio::join!(
        save_post(draft("slow", ""), Duration::from_millis(800), post, submit),
        save_post(draft("fast", ""), Duration::from_millis(100), post, submit),
    );

    assert_ne!(slow.id, fast.id);
    assert_eq!(post.with_untracked(|p| p.id().to_owned()), slow.id);
    assert!(!submit.with_untracked(SubmitState::is_loading));
}

#[tokio::test(start_paused = true)]
async fn pending_save_sets_id_again_after_clear() {
    let post = RwSignal::new(PostState::default());
    let submit = RwSignal::new(SubmitState::default());
    submit.update(SubmitState::begin);

    let mut pending = std::pin::pin!(save_post(draft("a", "b"), api::SIMULATED_LATENCY, post, submit));
    let _ = tokio::time::timeout(Duration::from_millis(100), &mut pending).await;
    clear_saved_post(post);
    pending.await;

    assert!(post.with_untracked(PostState::has_post));
}

// =============================================================
// clear_saved_post
// =============================================================

#[test]
fn clear_saved_post_hides_post_but_keeps_inputs() {
    let post = RwSignal::new(PostState::default());
    post.update(|p| p.set_id("p-1"));
    let values = RwSignal::new(FieldValues::register(PostDraft::FIELDS));
    values.update(|v| {
        v.set("title", "Hello");
        v.set("post", "World");
    });

    clear_saved_post(post);

    assert!(!post.with_untracked(PostState::has_post));
    assert_eq!(values.with_untracked(|v| v.get("title").to_owned()), "Hello");
    assert_eq!(values.with_untracked(|v| v.get("post").to_owned()), "World");
}
