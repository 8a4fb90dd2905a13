pub mod stats;
pub mod submit;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for feedback endpoints (mounted at /api)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recipe-feedback", post(submit::submit_feedback))
        .route("/feedback-stats", get(stats::feedback_stats))
}

#[derive(OpenApi)]
#[openapi(
    paths(submit::submit_feedback, stats::feedback_stats),
    components(schemas(
        submit::SubmitFeedbackRequest,
        submit::SubmitFeedbackResponse,
        stats::FeedbackStatsResponse,
        stats::LikePercentageValue,
    ))
)]
pub struct ApiDoc;
