pub mod feedback;
pub mod ingredients;
pub mod llm;
pub mod prompts;
pub mod ratings;

pub use feedback::{FeedbackKind, FeedbackLog, FeedbackRecord, FeedbackStats, LikePercentage};
pub use ingredients::normalize_ingredients;
pub use llm::{
    create_provider, create_provider_from_env, FakeProvider, GeminiProvider, LlmConfig, LlmError,
    LlmProvider, ProviderKind,
};
pub use prompts::render_recipe_prompt;
pub use ratings::{RatingError, RatingSummary, RatingsStore, GLOBAL_RECIPE_ID};
