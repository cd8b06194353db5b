use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults_everything_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.dropdown_open);
    assert!(!state.mobile_menu_open);
    assert!(!state.coming_soon_open);
    assert!(!state.back_to_top_visible);
}

// =============================================================
// close_menus
// =============================================================

#[test]
fn close_menus_collapses_both_menus() {
    let mut state = UiState {
        dropdown_open: true,
        mobile_menu_open: true,
        ..UiState::default()
    };
    state.close_menus();
    assert!(!state.dropdown_open);
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_menus_leaves_other_flags_alone() {
    let mut state = UiState {
        dark_mode: true,
        coming_soon_open: true,
        dropdown_open: true,
        ..UiState::default()
    };
    state.close_menus();
    assert!(state.dark_mode);
    assert!(state.coming_soon_open);
}
