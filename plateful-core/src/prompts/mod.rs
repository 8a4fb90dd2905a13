//! Prompt templates sent to the model provider.

pub mod recipe;

pub use recipe::render_recipe_prompt;
