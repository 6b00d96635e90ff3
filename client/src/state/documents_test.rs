use super::*;

#[test]
fn badge_starts_loading() {
    let badge = DocumentsBadge::default();
    assert_eq!(badge, DocumentsBadge::Loading);
    assert!(!badge.has_documents());
}

#[test]
fn loaded_badge_reports_document_count() {
    let badge = DocumentsBadge::from_outcome(Ok(DocumentsStatus { has_documents: true, document_count: 2 }));
    assert_eq!(badge.label(), "2 documents indexed");
    assert!(badge.has_documents());
}

#[test]
fn empty_index_is_not_marked_ready() {
    let badge = DocumentsBadge::from_outcome(Ok(DocumentsStatus::default()));
    assert_eq!(badge.label(), "No documents yet");
    assert!(!badge.has_documents());
}

#[test]
fn failed_fetch_marks_backend_unavailable() {
    let badge = DocumentsBadge::from_outcome(Err(ApiError::Transport("refused".to_owned())));
    assert_eq!(badge, DocumentsBadge::Unavailable);
    assert_eq!(badge.label(), "Backend unavailable");
}
