//! Error types for the LogLineOS client.

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP exchange could not be completed (connection refused, timeout,
    /// or a non-success status outside the auth family).
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The server rejected the API key (401/403).
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// The response body is not a JSON object.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Client construction / configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl ClientError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 1,
            Self::Auth { .. } => 2,
            Self::Decode { .. } => 4,
            Self::Transport { .. } => 5,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            ClientError::Config {
                message: "bad".into(),
            },
            ClientError::Auth {
                message: "denied".into(),
            },
            ClientError::Decode {
                message: "not json".into(),
            },
            ClientError::Transport {
                message: "refused".into(),
            },
        ];
        let mut codes: Vec<i32> = errors.iter().map(ClientError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_includes_message() {
        let err = ClientError::Auth {
            message: "invalid api key".into(),
        };
        assert_eq!(err.to_string(), "authentication failed: invalid api key");
    }
}
