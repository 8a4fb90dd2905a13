use crate::api::{bad_json, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plateful_core::{normalize_ingredients, render_recipe_prompt};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    pub ingredients: Option<Vec<String>>,
    pub allergies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateRecipeResponse {
    pub success: bool,
    /// Model output, unmodified
    pub recipe: String,
    pub ingredients: Vec<String>,
    pub allergies: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/generate-recipe",
    tag = "recipes",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Recipe generated", body = GenerateRecipeResponse),
        (status = 400, description = "No ingredients supplied", body = ErrorResponse),
        (status = 500, description = "Model provider failed", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRecipeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => return bad_json(rejection),
    };

    let ingredients = request.ingredients.unwrap_or_default();
    let allergies = request.allergies.unwrap_or_default();

    let prompt_ingredients = normalize_ingredients(&ingredients);
    if prompt_ingredients.is_empty() {
        return ErrorResponse::new("Please provide at least one ingredient")
            .into_response_with(StatusCode::BAD_REQUEST);
    }
    let prompt_allergies = normalize_ingredients(&allergies);

    let prompt = render_recipe_prompt(&prompt_ingredients, &prompt_allergies);

    tracing::info!(
        provider = state.llm.provider_name(),
        model = state.llm.model_name(),
        ingredients = prompt_ingredients.len(),
        allergies = prompt_allergies.len(),
        "generating recipe"
    );

    match state.llm.complete(&prompt).await {
        Ok(recipe) => Json(GenerateRecipeResponse {
            success: true,
            recipe,
            ingredients,
            allergies,
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Error generating recipe: {}", e);
            ErrorResponse::new("Failed to generate recipe")
                .with_message(e.to_string())
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{fake_state, read_json, rejected_json, state_with};
    use plateful_core::FakeProvider;
    use serde_json::json;
    use std::sync::Arc;

    fn request(ingredients: Option<Vec<&str>>, allergies: Option<Vec<&str>>) -> GenerateRecipeRequest {
        let owned = |items: Vec<&str>| items.into_iter().map(str::to_string).collect();
        GenerateRecipeRequest {
            ingredients: ingredients.map(owned),
            allergies: allergies.map(owned),
        }
    }

    #[tokio::test]
    async fn test_missing_ingredients_is_bad_request() {
        let response = generate_recipe(State(fake_state()), Ok(Json(request(None, None)))).await;
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please provide at least one ingredient");
    }

    #[tokio::test]
    async fn test_empty_ingredients_is_bad_request() {
        let response =
            generate_recipe(State(fake_state()), Ok(Json(request(Some(vec![]), None)))).await;
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let provider = Arc::new(FakeProvider::with_recipe_response());
        let rejection = rejected_json::<GenerateRecipeRequest>(r#"{"ingredients": [1, 2]}"#).await;

        let response = generate_recipe(State(state_with(provider.clone())), Err(rejection)).await;
        let (status, body) = read_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
        assert!(body["message"].is_string());
        assert!(provider.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_recipe_is_relayed_verbatim() {
        let upstream = "  Egg Fried Rice\n\n1. Scramble.\n2. Fry.  ";
        let state = state_with(Arc::new(FakeProvider::with_response("egg, rice", upstream)));

        let response = generate_recipe(
            State(state),
            Ok(Json(request(Some(vec!["egg", "rice"]), Some(vec!["peanut"])))),
        )
        .await;
        let (status, body) = read_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "recipe": upstream,
                "ingredients": ["egg", "rice"],
                "allergies": ["peanut"],
            })
        );
    }

    #[tokio::test]
    async fn test_prompt_sent_upstream_matches_builder() {
        let provider = Arc::new(FakeProvider::with_recipe_response());
        let state = state_with(provider.clone());

        let response = generate_recipe(
            State(state),
            Ok(Json(request(Some(vec!["Egg", "rice", "egg"]), Some(vec!["peanut"])))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let expected = render_recipe_prompt(
            &["egg".to_string(), "rice".to_string()],
            &["peanut".to_string()],
        );
        assert_eq!(provider.prompts(), vec![expected]);
    }

    #[tokio::test]
    async fn test_allergies_default_to_empty() {
        let response =
            generate_recipe(State(fake_state()), Ok(Json(request(Some(vec!["pasta"]), None)))).await;
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allergies"], json!([]));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_server_error() {
        let state = state_with(Arc::new(FakeProvider::new()));
        let response =
            generate_recipe(State(state), Ok(Json(request(Some(vec!["egg"]), None)))).await;
        let (status, body) = read_json(response).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate recipe");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("No response configured"));
    }
}
