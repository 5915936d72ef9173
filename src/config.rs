//! Configuration for the Estante client

use std::env;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote catalog API
    pub base_url: String,
}

const DEFAULT_API_URL: &str = "http://localhost:8080";

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Point the client at a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Config {
            base_url: env::var("ESTANTE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}
