use super::*;

#[test]
fn from_status_maps_not_found() {
    assert_eq!(SyncError::from_status(404, Some("gone".to_owned())), SyncError::NotFound);
}

#[test]
fn from_status_maps_validation_with_message() {
    assert_eq!(
        SyncError::from_status(400, Some("nickname taken".to_owned())),
        SyncError::Validation("nickname taken".to_owned())
    );
    assert_eq!(
        SyncError::from_status(422, None),
        SyncError::Rejected { status: 422, message: None }
    );
}

#[test]
fn from_status_keeps_other_statuses_as_rejected() {
    assert_eq!(
        SyncError::from_status(500, Some("boom".to_owned())),
        SyncError::Rejected { status: 500, message: Some("boom".to_owned()) }
    );
}

#[test]
fn user_message_prefers_server_message() {
    let err = SyncError::Rejected { status: 403, message: Some("penalty limit reached".to_owned()) };
    assert_eq!(err.user_message("Update failed."), "penalty limit reached");
}

#[test]
fn user_message_falls_back_without_server_message() {
    assert_eq!(SyncError::Network("offline".to_owned()).user_message("Update failed."), "Update failed.");
    assert_eq!(SyncError::NotFound.user_message("Update failed."), "Update failed.");
    let blank = SyncError::Rejected { status: 500, message: Some("  ".to_owned()) };
    assert_eq!(blank.user_message("Update failed."), "Update failed.");
}

#[test]
fn display_formats_status() {
    let err = SyncError::Rejected { status: 502, message: None };
    assert_eq!(err.to_string(), "request failed with status 502");
}

#[test]
fn extract_server_message_reads_json_message() {
    assert_eq!(
        extract_server_message(r#"{"status":400,"message":"bad phone"}"#),
        Some("bad phone".to_owned())
    );
    assert_eq!(extract_server_message(r#"{"error":"x"}"#), None);
    assert_eq!(extract_server_message(r#""quoted text""#), Some("quoted text".to_owned()));
}

#[test]
fn extract_server_message_accepts_short_plain_text() {
    assert_eq!(extract_server_message("Invalid credentials"), Some("Invalid credentials".to_owned()));
    assert_eq!(extract_server_message("   "), None);
    assert_eq!(extract_server_message("<html>error</html>"), None);
    assert_eq!(extract_server_message(&"x".repeat(500)), None);
}
