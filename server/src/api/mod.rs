pub mod feedback;
pub mod public;
pub mod ratings;
pub mod recipes;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Underlying cause, present when an upstream call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Map a body that failed to parse as JSON to a 400 with the shared error shape.
pub fn bad_json(rejection: JsonRejection) -> Response {
    tracing::debug!("rejected request body: {}", rejection.body_text());
    ErrorResponse::new("Invalid request body")
        .with_message(rejection.body_text())
        .into_response_with(StatusCode::BAD_REQUEST)
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Plateful API", description = "Recipe generation and feedback"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        public::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        feedback::ApiDoc::openapi(),
        ratings::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let spec = openapi();
        for path in [
            "/",
            "/api/generate-recipe",
            "/api/recipe-feedback",
            "/api/feedback-stats",
            "/ratings",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_error_response_omits_empty_message() {
        let value = serde_json::to_value(ErrorResponse::new("nope")).unwrap();
        assert_eq!(value, serde_json::json!({"error": "nope"}));

        let value = serde_json::to_value(ErrorResponse::new("nope").with_message("why")).unwrap();
        assert_eq!(value, serde_json::json!({"error": "nope", "message": "why"}));
    }
}
