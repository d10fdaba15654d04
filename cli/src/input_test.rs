use time::macros::datetime;

use super::*;

// =============================================================
// Chat log shapes
// =============================================================

#[test]
fn bare_array_loads_without_sources() {
    let log = parse_chat_log(r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"#)
        .expect("bare array");
    assert_eq!(log.messages.len(), 2);
    assert_eq!(log.messages[0].content, "hi");
    assert!(log.messages[1].is_assistant());
    assert!(log.sources.is_empty());
}

#[test]
fn archive_loads_conversation_and_sources() {
    let text = r#"{
        "exportDate": "2025-03-14T09:26:53Z",
        "messageCount": 1,
        "sources": ["a.pdf"],
        "conversation": [{"role":"user","content":"q"}]
    }"#;
    let log = parse_chat_log(text).expect("archive");
    assert_eq!(log.messages.len(), 1);
    assert_eq!(log.sources, vec!["a.pdf".to_owned()]);
}

#[test]
fn archive_without_metadata_fields_still_loads() {
    let log = parse_chat_log(r#"{"conversation": []}"#).expect("minimal archive");
    assert!(log.messages.is_empty());
}

#[test]
fn unrelated_json_is_rejected() {
    assert!(parse_chat_log(r#"{"answer": "x"}"#).is_err());
    assert!(parse_chat_log("not json").is_err());
}

// =============================================================
// Output and sources
// =============================================================

#[test]
fn output_defaults_to_dated_file_name() {
    let now = datetime!(2025-03-14 09:26:53 UTC);
    assert_eq!(output_path(None, ExportFormat::Markdown, now).unwrap(), PathBuf::from("chat-export-2025-03-14.md"));
    assert_eq!(
        output_path(Some(PathBuf::from("out.txt")), ExportFormat::Markdown, now).unwrap(),
        PathBuf::from("out.txt")
    );
}

#[test]
fn command_line_sources_override_stored_ones() {
    let stored = vec!["old.pdf".to_owned()];
    assert_eq!(choose_sources(Vec::new(), stored.clone()), stored);
    assert_eq!(choose_sources(vec!["new.md".to_owned()], stored), vec!["new.md".to_owned()]);
}
