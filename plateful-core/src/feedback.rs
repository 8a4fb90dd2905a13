//! Append-only, in-memory log of like/dislike judgments on generated recipes.
//!
//! Records live for the lifetime of the process. Nothing is ever updated or
//! removed, and submitting twice for the same recipe appends twice.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A user's judgment of a recipe. `None` means a previous judgment was withdrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Like,
    Dislike,
    None,
}

impl FeedbackKind {
    /// Label used in log lines; a withdrawn judgment reads as "removed".
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackKind::Like => "like",
            FeedbackKind::Dislike => "dislike",
            FeedbackKind::None => "removed",
        }
    }
}

impl From<Option<FeedbackKind>> for FeedbackKind {
    fn from(value: Option<FeedbackKind>) -> Self {
        value.unwrap_or(FeedbackKind::None)
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub recipe_id: String,
    pub feedback: FeedbackKind,
    pub ingredients: Vec<String>,
    pub recipe_text: String,
    /// ISO-8601 timestamp, client supplied or assigned on append
    pub timestamp: String,
}

impl FeedbackRecord {
    /// Build a record, stamping it with the current UTC time when the client sent none.
    pub fn new(
        recipe_id: String,
        feedback: FeedbackKind,
        ingredients: Vec<String>,
        recipe_text: String,
        timestamp: Option<String>,
    ) -> Self {
        Self {
            recipe_id,
            feedback,
            ingredients,
            recipe_text,
            timestamp: timestamp.unwrap_or_else(now_iso8601),
        }
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Like ratio as reported by the stats endpoint: a one-decimal string such as
/// `"66.7"`, or the bare number `0` when no feedback exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LikePercentage {
    Formatted(String),
    Zero(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub total: usize,
    pub likes: usize,
    pub dislikes: usize,
    pub like_percentage: LikePercentage,
}

impl FeedbackStats {
    fn from_records(records: &[FeedbackRecord]) -> Self {
        let likes = records
            .iter()
            .filter(|r| r.feedback == FeedbackKind::Like)
            .count();
        let dislikes = records
            .iter()
            .filter(|r| r.feedback == FeedbackKind::Dislike)
            .count();
        let total = records.len();

        let like_percentage = if total > 0 {
            LikePercentage::Formatted(format_percentage(likes, total))
        } else {
            LikePercentage::Zero(0)
        };

        Self {
            total,
            likes,
            dislikes,
            like_percentage,
        }
    }
}

/// `100 * part / whole` with one decimal, ties rounded up (12.25 -> "12.3").
/// Integer arithmetic so exact ties are not lost to float representation.
fn format_percentage(part: usize, whole: usize) -> String {
    let tenths = (part * 2000 + whole) / (2 * whole);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Thread-safe feedback log shared by all request handlers.
#[derive(Debug, Default)]
pub struct FeedbackLog {
    records: Mutex<Vec<FeedbackRecord>>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its zero-based position in the log.
    pub fn append(&self, record: FeedbackRecord) -> usize {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push(record);
        records.len() - 1
    }

    /// Counts and like ratio over the full history.
    pub fn stats(&self) -> FeedbackStats {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        FeedbackStats::from_records(&records)
    }

    /// Number of records appended since startup.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the record at `id` (the `feedbackId` returned on submit), if any.
    pub fn get(&self, id: usize) -> Option<FeedbackRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(recipe_id: &str, feedback: FeedbackKind) -> FeedbackRecord {
        FeedbackRecord::new(
            recipe_id.to_string(),
            feedback,
            vec!["egg".to_string()],
            "recipe".to_string(),
            Some("2025-01-01T00:00:00.000Z".to_string()),
        )
    }

    #[test]
    fn test_empty_stats() {
        let log = FeedbackLog::new();
        let stats = log.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.like_percentage, LikePercentage::Zero(0));
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            serde_json::json!({"total": 0, "likes": 0, "dislikes": 0, "likePercentage": 0})
        );
    }

    #[test]
    fn test_append_returns_position() {
        let log = FeedbackLog::new();
        assert_eq!(log.append(record("r1", FeedbackKind::Like)), 0);
        assert_eq!(log.append(record("r2", FeedbackKind::Dislike)), 1);
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(1).unwrap().recipe_id, "r2");
    }

    #[test]
    fn test_like_percentage_rounds_to_one_decimal() {
        let log = FeedbackLog::new();
        log.append(record("r1", FeedbackKind::Like));
        log.append(record("r2", FeedbackKind::Like));
        log.append(record("r3", FeedbackKind::Dislike));

        let stats = log.stats();
        assert_eq!(stats.likes, 2);
        assert_eq!(stats.dislikes, 1);
        assert_eq!(
            stats.like_percentage,
            LikePercentage::Formatted("66.7".to_string())
        );
    }

    #[test]
    fn test_like_percentage_rounds_ties_up() {
        assert_eq!(format_percentage(1, 400), "0.3");
        assert_eq!(format_percentage(49, 400), "12.3");
        assert_eq!(format_percentage(1, 1), "100.0");
        assert_eq!(format_percentage(0, 7), "0.0");
        assert_eq!(format_percentage(1, 3), "33.3");
        assert_eq!(format_percentage(2, 3), "66.7");
    }

    #[test]
    fn test_stats_round_tie_from_log() {
        let log = FeedbackLog::new();
        log.append(record("r0", FeedbackKind::Like));
        for i in 1..400 {
            log.append(record(&format!("r{i}"), FeedbackKind::Dislike));
        }

        let stats = log.stats();
        assert_eq!(stats.total, 400);
        assert_eq!(
            stats.like_percentage,
            LikePercentage::Formatted("0.3".to_string())
        );
    }

    #[test]
    fn test_withdrawn_feedback_counts_toward_total_only() {
        let log = FeedbackLog::new();
        log.append(record("r1", FeedbackKind::Like));
        log.append(record("r1", FeedbackKind::None));

        let stats = log.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.likes, 1);
        assert_eq!(stats.dislikes, 0);
        assert_eq!(
            stats.like_percentage,
            LikePercentage::Formatted("50.0".to_string())
        );
    }

    #[test]
    fn test_missing_timestamp_is_assigned() {
        let record = FeedbackRecord::new(
            "r1".to_string(),
            FeedbackKind::Like,
            vec![],
            String::new(),
            None,
        );
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
        assert!(record.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_feedback_kind_serde() {
        assert_eq!(
            serde_json::from_str::<Option<FeedbackKind>>("null").unwrap(),
            None
        );
        assert_eq!(
            serde_json::from_str::<Option<FeedbackKind>>(r#""dislike""#).unwrap(),
            Some(FeedbackKind::Dislike)
        );
        assert_eq!(FeedbackKind::from(None), FeedbackKind::None);
    }
}
