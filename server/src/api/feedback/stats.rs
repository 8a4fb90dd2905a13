use crate::state::AppState;
use axum::{extract::State, Json};
use plateful_core::{FeedbackStats, LikePercentage};
use serde::Serialize;
use utoipa::ToSchema;

/// Documents the two wire shapes of `likePercentage`.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LikePercentageValue {
    /// One-decimal percentage such as "66.7"
    Formatted(String),
    /// The number 0, sent when no feedback has been recorded
    Zero(u8),
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStatsResponse {
    pub total: usize,
    pub likes: usize,
    pub dislikes: usize,
    /// One-decimal string such as "66.7", or the number 0 when there is no feedback
    #[schema(value_type = LikePercentageValue)]
    pub like_percentage: LikePercentage,
}

impl From<FeedbackStats> for FeedbackStatsResponse {
    fn from(stats: FeedbackStats) -> Self {
        Self {
            total: stats.total,
            likes: stats.likes,
            dislikes: stats.dislikes,
            like_percentage: stats.like_percentage,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/feedback-stats",
    tag = "feedback",
    responses(
        (status = 200, description = "Feedback counts over the process lifetime", body = FeedbackStatsResponse)
    )
)]
pub async fn feedback_stats(State(state): State<AppState>) -> Json<FeedbackStatsResponse> {
    Json(state.feedback.stats().into())
}
