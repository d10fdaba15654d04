use super::*;

fn state_with(names: &[&str]) -> SourcesState {
    let mut state = SourcesState::default();
    state.add_uploaded(names.iter().map(|n| SourceDoc::new(*n, 2048, "application/pdf")).collect());
    state
}

// =============================================================
// SourceDoc
// =============================================================

#[test]
fn new_doc_is_selected_with_unique_id() {
    let a = SourceDoc::new("a.pdf", 1, "application/pdf");
    let b = SourceDoc::new("a.pdf", 1, "application/pdf");
    assert!(a.selected);
    assert_ne!(a.id, b.id);
}

#[test]
fn size_label_uses_one_decimal_kilobytes() {
    assert_eq!(SourceDoc::new("a", 12_800, "").size_label(), "12.5 KB");
    assert_eq!(SourceDoc::new("a", 0, "").size_label(), "0.0 KB");
}

// =============================================================
// List operations
// =============================================================

#[test]
fn add_uploaded_appends_in_order() {
    let mut state = state_with(&["a.pdf"]);
    state.add_uploaded(vec![SourceDoc::new("b.md", 10, "text/markdown")]);
    assert_eq!(state.names(), vec!["a.pdf", "b.md"]);
}

#[test]
fn toggle_flips_only_the_target() {
    let mut state = state_with(&["a.pdf", "b.pdf"]);
    let id = state.docs[0].id.clone();

    state.toggle(&id);
    assert!(!state.docs[0].selected);
    assert!(state.docs[1].selected);

    state.toggle(&id);
    assert!(state.docs[0].selected);
}

#[test]
fn remove_drops_the_entry() {
    let mut state = state_with(&["a.pdf", "b.pdf"]);
    let id = state.docs[0].id.clone();
    state.remove(&id);
    assert_eq!(state.names(), vec!["b.pdf"]);
}

#[test]
fn toggle_and_remove_ignore_unknown_ids() {
    let mut state = state_with(&["a.pdf"]);
    state.toggle("missing");
    state.remove("missing");
    assert_eq!(state.docs.len(), 1);
    assert!(state.docs[0].selected);
}

#[test]
fn names_are_distinct() {
    let state = state_with(&["a.pdf", "a.pdf", "b.pdf"]);
    assert_eq!(state.names(), vec!["a.pdf", "b.pdf"]);
}

#[test]
fn clear_empties_the_list() {
    let mut state = state_with(&["a.pdf"]);
    state.clear();
    assert!(state.is_empty());
}

// =============================================================
// Search and labels
// =============================================================

#[test]
fn visible_filters_case_insensitively() {
    let mut state = state_with(&["Handbook.pdf", "notes.md"]);
    state.query = "HAND".into();
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Handbook.pdf");
}

#[test]
fn visible_returns_everything_for_blank_query() {
    let mut state = state_with(&["a", "b"]);
    state.query = "  ".into();
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(count_label(0), "0 sources");
    assert_eq!(count_label(1), "1 source");
    assert_eq!(count_label(4), "4 sources");
}
