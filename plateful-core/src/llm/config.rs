//! LLM configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Default Gemini REST endpoint.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Which backend answers `complete` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Fake,
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "fake" => Ok(ProviderKind::Fake),
            other => Err(ConfigError::InvalidValue {
                name: "PLATEFUL_LLM_PROVIDER".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// LLM client configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: ProviderKind,
    /// API key for Gemini. Only required when `provider` is `Gemini`.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// - `PLATEFUL_LLM_PROVIDER`: "gemini" (default) or "fake"
    /// - `GEMINI_API_KEY`: API key, required for gemini
    /// - `PLATEFUL_LLM_MODEL`: model name (default: "gemini-2.5-flash")
    /// - `PLATEFUL_GEMINI_BASE_URL`: API base URL
    /// - `PLATEFUL_LLM_TIMEOUT_SECS`: request timeout (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = env::var("PLATEFUL_LLM_PROVIDER")
            .map(|v| v.parse())
            .unwrap_or(Ok(ProviderKind::Gemini))?;

        let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if provider == ProviderKind::Gemini && api_key.is_none() {
            return Err(ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()));
        }

        let model = env::var("PLATEFUL_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url = env::var("PLATEFUL_GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());

        let timeout_secs = match env::var("PLATEFUL_LLM_TIMEOUT_SECS") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PLATEFUL_LLM_TIMEOUT_SECS".to_string(),
                value: v,
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("gemini".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert_eq!(" FAKE ".parse::<ProviderKind>().unwrap(), ProviderKind::Fake);
        assert!("openai".parse::<ProviderKind>().is_err());
    }
}
