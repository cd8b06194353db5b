use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_empty_query_and_all_filter() {
    let state = ToolsState::default();
    assert!(state.query.is_empty());
    assert_eq!(state.active_filter, FILTER_ALL);
}

// =============================================================
// Mutually resetting transitions
// =============================================================

#[test]
fn selecting_a_filter_clears_the_query() {
    let mut state = ToolsState::default();
    state.set_query("chat");
    state.select_filter("image-generators");
    assert!(state.query.is_empty());
    assert_eq!(state.active_filter, "image-generators");
}

#[test]
fn submitting_a_search_resets_the_filter() {
    let mut state = ToolsState::default();
    state.select_filter("chatbots");
    state.set_query("video");
    state.submit_search();
    assert_eq!(state.active_filter, FILTER_ALL);
    assert_eq!(state.query, "video");
}

#[test]
fn typing_alone_keeps_the_active_filter() {
    let mut state = ToolsState::default();
    state.select_filter("chatbots");
    state.set_query("gpt");
    assert_eq!(state.active_filter, "chatbots");
}

// =============================================================
// matches
// =============================================================

#[test]
fn default_state_matches_whole_catalog() {
    let state = ToolsState::default();
    assert_eq!(state.matches().len(), crate::catalog::data::CATALOG.len());
}

#[test]
fn query_scoped_to_filter_can_match_nothing() {
    let mut state = ToolsState::default();
    state.select_filter("image-generators");
    state.set_query("chat");
    assert!(state.matches().is_empty());
}
