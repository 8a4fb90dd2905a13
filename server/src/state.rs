use plateful_core::{FeedbackLog, LlmProvider, RatingsStore};
use std::sync::Arc;

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

#[derive(Debug)]
pub struct AppContext {
    pub llm: Arc<dyn LlmProvider>,
    pub feedback: FeedbackLog,
    pub ratings: RatingsStore,
}

impl AppContext {
    pub fn new(llm: Arc<dyn LlmProvider>) -> AppState {
        Arc::new(Self {
            llm,
            feedback: FeedbackLog::new(),
            ratings: RatingsStore::new(),
        })
    }
}
