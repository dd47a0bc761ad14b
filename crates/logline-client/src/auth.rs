//! API-key authentication for the LogLineOS server.
//!
//! The server authenticates every request with an `x-api-key` header. The key
//! comes from either explicit configuration or the `LOGLINE_API_KEY`
//! environment variable; when neither is set, requests are sent without the
//! header and the server decides what an anonymous caller may do.

/// Name of the authentication header expected by the server.
pub const API_KEY_HEADER: &str = "x-api-key";

/// API key provider for server authentication.
#[derive(Debug, Clone)]
pub enum ApiKeyProvider {
    /// Static key (from config or env).
    Static(String),

    /// No authentication.
    None,
}

impl ApiKeyProvider {
    /// Create a static key provider.
    pub fn static_key(key: impl Into<String>) -> Self {
        Self::Static(key.into())
    }

    /// Create from the `LOGLINE_API_KEY` environment variable, falling back
    /// to no auth when unset or empty.
    pub fn from_env() -> Self {
        match std::env::var("LOGLINE_API_KEY") {
            Ok(key) if !key.is_empty() => Self::Static(key),
            _ => Self::None,
        }
    }

    /// Get the current key.
    pub fn get_key(&self) -> Option<&str> {
        match self {
            Self::Static(key) => Some(key),
            Self::None => None,
        }
    }

    /// Check if authentication is configured.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Default for ApiKeyProvider {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_static_key() {
        let provider = ApiKeyProvider::static_key("changeme");
        assert!(provider.is_authenticated());
        assert_eq!(provider.get_key(), Some("changeme"));
    }

    #[test]
    fn test_no_auth() {
        let provider = ApiKeyProvider::None;
        assert!(!provider.is_authenticated());
        assert_eq!(provider.get_key(), None);
    }

    #[test]
    #[serial]
    fn test_from_env_static() {
        std::env::set_var("LOGLINE_API_KEY", "env-key");
        let provider = ApiKeyProvider::from_env();
        std::env::remove_var("LOGLINE_API_KEY");

        assert!(matches!(provider, ApiKeyProvider::Static(_)));
    }

    #[test]
    #[serial]
    fn test_from_env_empty_key() {
        std::env::set_var("LOGLINE_API_KEY", "");
        let provider = ApiKeyProvider::from_env();
        std::env::remove_var("LOGLINE_API_KEY");

        assert!(matches!(provider, ApiKeyProvider::None));
    }
}
