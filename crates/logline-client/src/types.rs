//! Client configuration.

use serde::{Deserialize, Serialize};

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for the LogLineOS server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, sent as `x-api-key` on every request.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds. `None` uses the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `LOGLINE_API_URL` | Server base URL |
    /// | `LOGLINE_API_KEY` | API key |
    /// | `LOGLINE_TIMEOUT_SECS` | Per-request timeout in seconds |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("LOGLINE_API_URL").unwrap_or_else(|_| default_base_url()),
            api_key: std::env::var("LOGLINE_API_KEY").ok().filter(|k| !k.is_empty()),
            timeout_secs: std::env::var("LOGLINE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}
