use super::RatingSummaryResponse;
use crate::api::{bad_json, ErrorResponse};
use crate::auth::AuthRater;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plateful_core::GLOBAL_RECIPE_ID;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    /// Whole stars, 1 through 5
    pub rating: i64,
    pub recipe_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/ratings",
    tag = "ratings",
    request_body = SubmitRatingRequest,
    responses(
        (status = 200, description = "Rating stored; updated summary", body = RatingSummaryResponse),
        (status = 400, description = "Rating outside 1-5 or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn submit_rating(
    AuthRater(rater_id): AuthRater,
    State(state): State<AppState>,
    payload: Result<Json<SubmitRatingRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => return bad_json(rejection),
    };

    let recipe_id = request
        .recipe_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| GLOBAL_RECIPE_ID.to_string());

    match state.ratings.rate(&recipe_id, &rater_id, request.rating) {
        Ok(summary) => {
            tracing::info!(
                recipe_id = %recipe_id,
                total = summary.total_ratings,
                "rating recorded"
            );
            Json(RatingSummaryResponse::from(summary)).into_response()
        }
        Err(e) => ErrorResponse::new(e.to_string()).into_response_with(StatusCode::BAD_REQUEST),
    }
}
