//! Fake LLM provider for testing and offline development.
//!
//! Returns deterministic responses based on prompt matching, so recipe
//! generation can be exercised without network access or API costs.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// A fake LLM provider.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring (case-insensitive), first registration wins. If nothing matches,
/// the default response is returned, or an error if there is none.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// (prompt substring, response) in registration order
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    /// Every prompt seen, for assertions in tests
    prompts: Mutex<Vec<String>>,
}

impl FakeProvider {
    /// Create a FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns `response` for prompts containing `prompt_contains`.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::new().add_response(prompt_contains, response)
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
        self
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// A FakeProvider that answers any recipe prompt with a short canned recipe.
    pub fn with_recipe_response() -> Self {
        Self::new().with_default_response(
            "Recipe Name: Pantry Skillet\n\
             Prep Time: 10 minutes\nCook Time: 15 minutes\nServings: 2\n\n\
             Ingredients:\n- Everything you listed\n\n\
             Instructions:\n1. Chop everything.\n2. Cook in a hot skillet until done.\n\n\
             Tips: Season to taste.",
        )
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());

        let prompt_lower = prompt.to_lowercase();
        if let Some((_, response)) = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern.as_str()))
        {
            return Ok(response.clone());
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
