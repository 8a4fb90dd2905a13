use super::RatingSummaryResponse;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use plateful_core::GLOBAL_RECIPE_ID;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RatingsQuery {
    /// Recipe to summarize; omitted means the shared "global" bucket
    pub recipe_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/ratings",
    tag = "ratings",
    params(RatingsQuery),
    responses(
        (status = 200, description = "Average and count of ratings", body = RatingSummaryResponse)
    )
)]
pub async fn get_ratings(
    State(state): State<AppState>,
    Query(query): Query<RatingsQuery>,
) -> Json<RatingSummaryResponse> {
    let recipe_id = query.recipe_id.as_deref().unwrap_or(GLOBAL_RECIPE_ID);
    Json(state.ratings.summary(recipe_id).into())
}
