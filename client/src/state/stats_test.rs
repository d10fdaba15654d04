use serde_json::json;

use super::*;

fn snapshot(value: serde_json::Value) -> KbStats {
    serde_json::from_value(value).unwrap()
}

#[test]
fn stats_state_default_is_unhealthy_without_stats() {
    let state = StatsState::default();
    assert!(!state.healthy);
    assert_eq!(state.documents_in_kb(), 0);
    assert_eq!(state.chunk_count(), None);
}

#[test]
fn poll_interval_is_thirty_seconds() {
    assert_eq!(STATS_POLL_INTERVAL.as_secs(), 30);
}

#[test]
fn mark_healthy_stores_snapshot() {
    let mut state = StatsState::default();
    state.mark_healthy(snapshot(json!({ "documents_in_kb": 2, "total_chunks": 31 })));
    assert!(state.healthy);
    assert_eq!(state.documents_in_kb(), 2);
    assert_eq!(state.chunk_count(), Some(31));
}

#[test]
fn mark_unreachable_keeps_last_snapshot() {
    let mut state = StatsState::default();
    state.mark_healthy(snapshot(json!({ "documents_in_kb": 2 })));
    state.mark_unreachable();
    assert!(!state.healthy);
    assert_eq!(state.documents_in_kb(), 2);
}

#[test]
fn apply_upload_updates_document_count() {
    let mut state = StatsState::default();
    state.replace(snapshot(json!({ "documents_in_kb": 1, "total_chunks": 8 })));
    state.apply_upload(&UploadResponse {
        documents_in_kb: Some(4),
        ..UploadResponse::default()
    });
    assert_eq!(state.documents_in_kb(), 4);
    assert_eq!(state.chunk_count(), Some(8));
}

#[test]
fn apply_upload_without_count_changes_nothing() {
    let mut state = StatsState::default();
    state.apply_upload(&UploadResponse::default());
    assert_eq!(state.stats, None);
}

#[test]
fn apply_upload_creates_stats_when_missing() {
    let mut state = StatsState::default();
    state.apply_upload(&UploadResponse {
        documents_in_kb: Some(3),
        ..UploadResponse::default()
    });
    assert_eq!(state.documents_in_kb(), 3);
}
