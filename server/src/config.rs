//! Server configuration from environment variables.

use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `PORT`: listen port on 0.0.0.0 (default: 3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(v) => parse_port(&v)?,
            Err(_) => {
                tracing::debug!("PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Ok(Self { port })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: "PORT".to_string(),
        value: value.to_string(),
    })
}
