use serde_json::json;

use super::*;

// =============================================================================
// normalize_date
// =============================================================================

#[test]
fn plain_dates_pass_through() {
    assert_eq!(normalize_date(&json!("2024-03-09")), "2024-03-09");
}

#[test]
fn offset_timestamps_convert_to_utc_date() {
    assert_eq!(normalize_date(&json!("2024-03-10T01:30:00+09:00")), "2024-03-09");
    assert_eq!(normalize_date(&json!("2024-03-10T01:30:00Z")), "2024-03-10");
}

#[test]
fn naive_datetimes_and_epoch_millis_are_read() {
    assert_eq!(normalize_date(&json!("2024-03-10T23:59:59.123")), "2024-03-10");
    assert_eq!(normalize_date(&json!(0)), "1970-01-01");
}

#[test]
fn unreadable_dates_become_empty() {
    assert_eq!(normalize_date(&json!("soon")), "");
    assert_eq!(normalize_date(&json!(null)), "");
    assert_eq!(normalize_date(&json!("")), "");
}

// =============================================================================
// PenaltySummary
// =============================================================================

fn response(body: serde_json::Value) -> PenaltyResponse {
    serde_json::from_value(body).unwrap()
}

#[test]
fn total_prefers_total_points_then_total_score() {
    let summary = PenaltySummary::from_response(&response(json!({ "totalPoints": 2, "totalScore": 9 })));
    assert_eq!(summary.total, 2);
    let summary = PenaltySummary::from_response(&response(json!({ "totalScore": 4 })));
    assert_eq!(summary.total, 4);
}

#[test]
fn total_falls_back_to_history_count() {
    let summary = PenaltySummary::from_response(&response(json!({
        "totalPoints": "n/a",
        "histories": [{ "reason": "late" }, {}]
    })));
    assert_eq!(summary.total, 2);
}

#[test]
fn missing_history_fields_get_defaults() {
    let summary = PenaltySummary::from_response(&response(json!({ "histories": [{}] })));
    assert_eq!(
        summary.rows,
        vec![PenaltyRow { reason: "-".to_owned(), date: String::new(), note: "1 penalty point assigned".to_owned() }]
    );
}

#[test]
fn block_flag_follows_total() {
    let mut summary = PenaltySummary::default();
    assert!(!summary.is_blocked());
    summary.total = 3;
    assert!(summary.is_blocked());
    summary.total = 2;
    assert!(!summary.is_blocked());
}

#[test]
fn updated_at_label_uses_local_offset() {
    // 2024-03-01T15:30:05Z
    let millis = 1_709_307_005_000;
    assert_eq!(updated_at_label(millis, 0).as_deref(), Some("Last updated: 2024-03-01 15:30:05"));
    assert_eq!(updated_at_label(millis, 540).as_deref(), Some("Last updated: 2024-03-02 00:30:05"));
    assert_eq!(updated_at_label(millis, -300).as_deref(), Some("Last updated: 2024-03-01 10:30:05"));
}

#[test]
fn updated_at_label_rejects_impossible_offsets() {
    assert_eq!(updated_at_label(0, 24 * 60), None);
}
