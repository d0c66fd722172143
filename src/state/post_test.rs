use super::*;

// =============================================================
// PostState defaults
// =============================================================

#[test]
fn post_state_default_has_no_post() {
    let state = PostState::default();
    assert_eq!(state.id(), "");
    assert!(!state.has_post());
}

// =============================================================
// set_id / clear
// =============================================================

#[test]
fn set_id_saves_post() {
    let mut state = PostState::default();
    state.set_id("p-1");
    assert_eq!(state.id(), "p-1");
    assert!(state.has_post());
}

#[test]
fn set_id_overwrites_previous_id() {
    let mut state = PostState::default();
    state.set_id("p-1");
    state.set_id("p-2");
    assert_eq!(state.id(), "p-2");
}

#[test]
fn set_id_empty_clears_post() {
    let mut state = PostState::default();
    state.set_id("p-1");
    state.set_id("");
    assert!(!state.has_post());
}

#[test]
fn clear_empties_id() {
    let mut state = PostState::default();
    state.set_id("p-1");
    state.clear();
    assert_eq!(state, PostState::default());
}

#[test]
fn set_id_accepts_whitespace_without_validation() {
    let mut state = PostState::default();
    state.set_id(" ");
    assert!(state.has_post());
}
