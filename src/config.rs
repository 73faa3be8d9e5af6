//! Environment-based configuration

use std::env;

/// Server configuration loaded from the environment (with `.env` support)
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Self {
            bind_addr: format!("{}:{}", host, port),
        }
    }
}
