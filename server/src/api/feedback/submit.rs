use crate::api::{bad_json, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plateful_core::{FeedbackKind, FeedbackRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub recipe_id: Option<String>,
    /// "like", "dislike", or null to withdraw a previous judgment
    #[schema(value_type = Option<String>)]
    pub feedback: Option<FeedbackKind>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub recipe: String,
    /// ISO-8601; assigned by the server when absent
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackResponse {
    pub success: bool,
    pub message: String,
    /// Position of the record in the feedback log
    pub feedback_id: usize,
}

#[utoipa::path(
    post,
    path = "/api/recipe-feedback",
    tag = "feedback",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 200, description = "Feedback recorded", body = SubmitFeedbackResponse),
        (status = 400, description = "Missing recipe id or malformed body", body = ErrorResponse)
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Json<SubmitFeedbackRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => return bad_json(rejection),
    };

    let Some(recipe_id) = request.recipe_id.filter(|id| !id.is_empty()) else {
        return ErrorResponse::new("Recipe ID is required")
            .into_response_with(StatusCode::BAD_REQUEST);
    };

    let record = FeedbackRecord::new(
        recipe_id,
        FeedbackKind::from(request.feedback),
        request.ingredients,
        request.recipe,
        request.timestamp,
    );

    tracing::info!(
        feedback = %record.feedback,
        recipe_id = %record.recipe_id,
        ingredients = %record.ingredients.join(", "),
        "feedback received"
    );

    let feedback_id = state.feedback.append(record);

    Json(SubmitFeedbackResponse {
        success: true,
        message: "Feedback received".to_string(),
        feedback_id,
    })
    .into_response()
}
