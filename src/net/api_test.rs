use super::*;

#[test]
fn endpoint_builders_format_expected_paths() {
    assert_eq!(MY_CONTENT_ENDPOINT, "/guide/my_content");
    assert_eq!(edit_content_endpoint(5), "/guide/edit_content/5");
    assert_eq!(delete_content_endpoint(42), "/guide/delete_content/42");
    assert_eq!(content_detail_endpoint(7), "/content/7");
}

#[test]
fn unwrap_envelope_returns_payload_on_success() {
    let resp: ApiResponse<Vec<ContentRecord>> = serde_json::from_str(
        r#"{"success": true, "content": [{
            "id": 1, "upload_type": "photo", "title": "t", "description": "d",
            "upload_date": "2025-01-01T00:00:00", "guide_id": 2
        }]}"#,
    )
    .unwrap();
    let rows = unwrap_envelope(resp).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
}

#[test]
fn unwrap_envelope_rejects_false_success_with_server_message() {
    let resp: ApiResponse<ContentRecord> =
        serde_json::from_str(r#"{"success": false, "message": "Content not found"}"#).unwrap();
    assert_eq!(
        unwrap_envelope(resp),
        Err(ApiError::Rejected(Some("Content not found".to_owned())))
    );
}

#[test]
fn unwrap_envelope_rejects_missing_success_flag() {
    let resp: ApiResponse<ContentRecord> = serde_json::from_str(r"{}").unwrap();
    assert_eq!(unwrap_envelope(resp), Err(ApiError::Rejected(None)));
}

#[test]
fn unwrap_envelope_rejects_success_without_payload() {
    let resp: ApiResponse<ContentDetail> = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert_eq!(unwrap_envelope(resp), Err(ApiError::Rejected(None)));
}

#[test]
fn unwrap_ack_ignores_payload_and_tracks_flag() {
    let ok: ApiResponse<serde_json::Value> =
        serde_json::from_str(r#"{"success": true, "message": "updated"}"#).unwrap();
    assert_eq!(unwrap_ack(ok), Ok(()));

    let rejected: ApiResponse<serde_json::Value> =
        serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert_eq!(unwrap_ack(rejected), Err(ApiError::Rejected(None)));
}

#[test]
fn api_error_message_prefers_server_wording() {
    let rejected = ApiError::Rejected(Some("Access denied".to_owned()));
    assert_eq!(rejected.message("Something went wrong."), "Access denied");

    let bare = ApiError::Rejected(None);
    assert_eq!(bare.message("Something went wrong."), "Something went wrong.");

    assert_eq!(ApiError::Transport.message("Try again."), "Try again.");
}
