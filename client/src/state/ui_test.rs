use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_everything_closed() {
    let state = UiState::default();
    assert!(!state.export_open);
    assert!(!state.copied);
    assert!(!state.confirm_clear_open);
    assert!(!state.sources_expanded(0));
}

#[test]
fn copied_reset_is_two_seconds() {
    assert_eq!(COPIED_RESET.as_millis(), 2000);
}

// =============================================================
// Citation panels
// =============================================================

#[test]
fn toggle_sources_is_per_message() {
    let mut state = UiState::default();
    state.toggle_sources(1);
    assert!(state.sources_expanded(1));
    assert!(!state.sources_expanded(3));

    state.toggle_sources(3);
    state.toggle_sources(1);
    assert!(!state.sources_expanded(1));
    assert!(state.sources_expanded(3));
}

// =============================================================
// Export dialog
// =============================================================

#[test]
fn open_export_resets_copied_flag() {
    let mut state = UiState {
        copied: true,
        ..UiState::default()
    };
    state.open_export();
    assert!(state.export_open);
    assert!(!state.copied);
}

#[test]
fn close_export_hides_dialog() {
    let mut state = UiState::default();
    state.open_export();
    state.copied = true;
    state.close_export();
    assert!(!state.export_open);
    assert!(!state.copied);
}

#[test]
fn reset_conversation_collapses_all_panels() {
    let mut state = UiState::default();
    state.toggle_sources(0);
    state.toggle_sources(2);
    state.open_export();

    state.reset_conversation();
    assert!(!state.sources_expanded(0));
    assert!(!state.sources_expanded(2));
    assert!(!state.export_open);
}
