use super::*;

#[test]
fn detail_failure_messages_follow_the_error_taxonomy() {
    assert_eq!(detail_failure_message(&ApiError::Transport), "Error loading content");
    assert_eq!(
        detail_failure_message(&ApiError::Rejected(Some("Content not found".to_owned()))),
        "Failed to load content details"
    );
    assert_eq!(
        detail_failure_message(&ApiError::Rejected(None)),
        "Failed to load content details"
    );
}
