pub mod summary;
pub mod submit;

use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use plateful_core::RatingSummary;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

/// Returns the router for /ratings
pub fn router() -> Router<AppState> {
    Router::new().route("/ratings", get(summary::get_ratings).post(submit::submit_rating))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummaryResponse {
    pub recipe_id: String,
    pub average_rating: f64,
    pub total_ratings: u64,
}

impl From<RatingSummary> for RatingSummaryResponse {
    fn from(summary: RatingSummary) -> Self {
        Self {
            recipe_id: summary.recipe_id,
            average_rating: summary.average_rating,
            total_ratings: summary.total_ratings,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(summary::get_ratings, submit::submit_rating),
    components(schemas(RatingSummaryResponse, submit::SubmitRatingRequest))
)]
pub struct ApiDoc;
