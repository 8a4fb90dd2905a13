pub mod generate;

use crate::state::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for recipe generation (mounted at /api)
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-recipe", post(generate::generate_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate::generate_recipe),
    components(schemas(generate::GenerateRecipeRequest, generate::GenerateRecipeResponse))
)]
pub struct ApiDoc;
