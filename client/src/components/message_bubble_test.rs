use super::*;

#[test]
fn references_label_shows_count() {
    assert_eq!(references_label(3), "References (3)");
}

#[test]
fn percent_label_rounds_score() {
    assert_eq!(percent_label(&Source::new("a").with_score(0.876)), Some("88%".to_owned()));
    assert_eq!(percent_label(&Source::new("a").with_score(0.0)), Some("0%".to_owned()));
}

#[test]
fn percent_label_absent_without_score() {
    assert_eq!(percent_label(&Source::new("a")), None);
}

#[test]
fn quoted_wraps_excerpt() {
    assert_eq!(quoted("the policy applies"), "\"the policy applies\"");
}
