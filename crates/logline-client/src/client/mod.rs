//! Client for the LogLineOS append/scan/query API.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::auth::ApiKeyProvider;
use crate::error::{ClientError, ClientResult};
use crate::event::AtomicEvent;
use crate::types::ClientConfig;

mod http;

use http::HttpBackend;

const USER_AGENT_VALUE: &str = concat!("logline-client/", env!("CARGO_PKG_VERSION"));

/// Client for the LogLineOS REST API.
///
/// Stateless pass-through: each operation is one independent request/response
/// round trip; the only state held between calls is the immutable
/// configuration.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpBackend,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let key_provider = config
            .api_key
            .as_ref()
            .map(ApiKeyProvider::static_key)
            .unwrap_or_else(ApiKeyProvider::from_env);

        Self::with_key_provider(config, key_provider)
    }

    pub fn with_key_provider(
        config: ClientConfig,
        key_provider: ApiKeyProvider,
    ) -> ClientResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| ClientError::Config {
            message: format!("failed to create HTTP client: {}", e),
        })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            http: HttpBackend {
                client,
                base_url,
                key_provider,
            },
        })
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Append one atomic event to the remote log.
    ///
    /// Ownership of the record transfers to the server on success; the
    /// returned JSON is the server's acknowledgement, treated as opaque.
    pub async fn append(&self, event: &AtomicEvent) -> ClientResult<Value> {
        let url = format!("{}/append", self.http.base_url);
        debug!(url = %url, trace_id = %event.metadata.trace_id, "appending event");

        self.http.post_json(&url, event).await
    }

    /// Scan the remote log. Semantics of the result are owned by the server.
    pub async fn scan(&self) -> ClientResult<Value> {
        let url = format!("{}/scan", self.http.base_url);
        debug!(url = %url, "scanning log");

        self.http.get_json(&url, &[]).await
    }

    /// Query events correlated by `trace_id`. The identifier is
    /// percent-encoded into the query string.
    pub async fn query(&self, trace_id: &str) -> ClientResult<Value> {
        let url = format!("{}/query", self.http.base_url);
        debug!(url = %url, trace_id = %trace_id, "querying by trace id");

        self.http.get_json(&url, &[("trace_id", trace_id)]).await
    }

    pub fn base_url(&self) -> &str {
        &self.http.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.http.key_provider.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_url("http://localhost:8000/");
        let client = ApiClient::new(config).expect("failed to create client");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_explicit_key_wins_over_env() {
        let config = ClientConfig::default().with_api_key("explicit");
        let client = ApiClient::new(config).expect("failed to create client");
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_no_key_provider() {
        let client =
            ApiClient::with_key_provider(ClientConfig::default(), ApiKeyProvider::None)
                .expect("failed to create client");
        assert!(!client.is_authenticated());
    }
}
