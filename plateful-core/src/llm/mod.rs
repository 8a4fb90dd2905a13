//! LLM provider abstraction for recipe generation.
//!
//! The server only ever needs "prompt in, text out", so providers expose a
//! single `complete` call. `FakeProvider` stands in for the hosted model in
//! tests and local development.

mod config;
mod fake;
mod gemini;

pub use config::{ConfigError, LlmConfig, ProviderKind};
pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Model returned no text: {0}")]
    EmptyResponse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

impl From<ConfigError> for LlmError {
    fn from(e: ConfigError) -> Self {
        LlmError::NotConfigured(e.to_string())
    }
}

/// Trait for LLM providers.
///
/// Implementations must be thread-safe; one provider instance is shared by
/// every request handler.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the model and get its text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name (e.g. "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g. "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Build a provider from an already loaded configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    match config.provider {
        ProviderKind::Fake => Ok(Box::new(FakeProvider::with_recipe_response())),
        ProviderKind::Gemini => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            Ok(Box::new(GeminiProvider::new(
                api_key,
                config.model.clone(),
                config.base_url.clone(),
                config.timeout,
            )?))
        }
    }
}

/// Build a provider from the process environment.
///
/// See [`LlmConfig::from_env`] for the variables read.
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let config = LlmConfig::from_env()?;
    create_provider(&config)
}
