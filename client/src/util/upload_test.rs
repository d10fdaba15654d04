use super::*;

#[test]
fn accept_attribute_lists_all_extensions() {
    assert_eq!(accept_attribute(), ".pdf,.jpg,.jpeg,.png,.txt,.md,.docx");
}

#[test]
fn picker_filter_matches_ingestion_rules() {
    assert!(is_accepted("report.PDF"));
    assert!(!is_accepted("slides.pptx"));
}
