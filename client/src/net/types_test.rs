use serde_json::json;

use super::*;

fn stats(value: Value) -> KbStats {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// KbStats
// =============================================================

#[test]
fn stats_deserialize_from_any_object() {
    let parsed = stats(json!({ "documents_in_kb": 3, "status": "ok" }));
    assert_eq!(parsed.documents_in_kb(), Some(3));
    assert_eq!(parsed.0.get("status"), Some(&json!("ok")));
}

#[test]
fn documents_in_kb_absent_when_missing_or_not_a_count() {
    assert_eq!(stats(json!({})).documents_in_kb(), None);
    assert_eq!(stats(json!({ "documents_in_kb": "many" })).documents_in_kb(), None);
}

#[test]
fn chunk_count_prefers_first_non_zero_field() {
    assert_eq!(stats(json!({ "documents": 12, "total_chunks": 40 })).chunk_count(), 12);
    assert_eq!(stats(json!({ "documents": 0, "total_chunks": 40 })).chunk_count(), 40);
    assert_eq!(stats(json!({})).chunk_count(), 0);
}

#[test]
fn set_documents_in_kb_overwrites() {
    let mut parsed = stats(json!({ "documents_in_kb": 1 }));
    parsed.set_documents_in_kb(5);
    assert_eq!(parsed.documents_in_kb(), Some(5));
}

// =============================================================
// UploadResponse
// =============================================================

#[test]
fn upload_response_keeps_unknown_fields() {
    let parsed: UploadResponse =
        serde_json::from_value(json!({ "documents_in_kb": 7, "processed_files": ["a.pdf"] })).unwrap();
    assert_eq!(parsed.documents_in_kb, Some(7));
    assert_eq!(parsed.extra.get("processed_files"), Some(&json!(["a.pdf"])));
}

// =============================================================
// RagForm
// =============================================================

#[test]
fn ask_form_sends_only_question() {
    assert_eq!(RagForm::ask("why?").text_fields(), vec![("question", "why?".to_owned())]);
}

#[test]
fn upload_form_sends_flags_as_strings() {
    assert_eq!(
        RagForm::upload(true, false).text_fields(),
        vec![("use_ocr", "true".to_owned()), ("clear_kb", "false".to_owned())]
    );
}

#[test]
fn upload_and_ask_form_omits_clear_flag() {
    assert_eq!(
        RagForm::upload_and_ask("q", true).text_fields(),
        vec![("question", "q".to_owned()), ("use_ocr", "true".to_owned())]
    );
}
