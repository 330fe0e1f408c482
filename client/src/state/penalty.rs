//! Penalty history view model.
//!
//! The endpoint has shipped several shapes over time: the total may arrive as
//! `totalPoints` or `totalScore`, and dates as ISO strings or epoch millis.
//! Everything is folded into one table-ready summary here.

#[cfg(test)]
#[path = "penalty_test.rs"]
mod penalty_test;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::net::types::{PenaltyHistory, PenaltyResponse};

/// Accumulated points at which rentals are blocked.
pub const BLOCK_THRESHOLD: i64 = 3;

const DEFAULT_REASON: &str = "-";
const DEFAULT_NOTE: &str = "1 penalty point assigned";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PenaltyRow {
    pub reason: String,
    /// `YYYY-MM-DD`, or empty when the date could not be read.
    pub date: String,
    pub note: String,
}

impl From<&PenaltyHistory> for PenaltyRow {
    fn from(history: &PenaltyHistory) -> Self {
        Self {
            reason: history.reason.clone().unwrap_or_else(|| DEFAULT_REASON.to_owned()),
            date: history.date.as_ref().map(normalize_date).unwrap_or_default(),
            note: history.note.clone().unwrap_or_else(|| DEFAULT_NOTE.to_owned()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PenaltySummary {
    pub total: i64,
    pub rows: Vec<PenaltyRow>,
}

impl PenaltySummary {
    pub fn from_response(response: &PenaltyResponse) -> Self {
        let rows: Vec<PenaltyRow> = response.histories.iter().map(PenaltyRow::from).collect();
        let total = response
            .total_points
            .as_ref()
            .and_then(finite_integer)
            .or_else(|| response.total_score.as_ref().and_then(finite_integer))
            .unwrap_or_else(|| i64::try_from(rows.len()).unwrap_or(i64::MAX));
        Self { total, rows }
    }

    pub fn is_blocked(&self) -> bool {
        self.total >= BLOCK_THRESHOLD
    }
}

#[allow(clippy::cast_possible_truncation)]
fn finite_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        _ => None,
    }
}

/// Render a history date as `YYYY-MM-DD` in UTC.
pub fn normalize_date(raw: &Value) -> String {
    let date = match raw {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis).map(|dt| dt.date_naive()),
        _ => None,
    };
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// "Last updated" stamp for a successful load, in the viewer's local time.
///
/// `utc_offset_minutes` is east-positive (UTC+9 is `540`). Returns `None`
/// for an out-of-range instant or offset.
pub fn updated_at_label(epoch_millis: i64, utc_offset_minutes: i32) -> Option<String> {
    let offset = FixedOffset::east_opt(utc_offset_minutes.checked_mul(60)?)?;
    let instant = DateTime::<Utc>::from_timestamp_millis(epoch_millis)?;
    Some(format!("Last updated: {}", instant.with_timezone(&offset).format("%Y-%m-%d %H:%M:%S")))
}
