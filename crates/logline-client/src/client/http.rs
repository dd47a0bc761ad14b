//! HTTP layer: header attachment, status mapping, body decoding.
//!
//! This is the ONLY place for status code handling. client/mod.rs never
//! interprets status codes.

use serde::Serialize;
use serde_json::Value;

use crate::auth::{ApiKeyProvider, API_KEY_HEADER};
use crate::error::{ClientError, ClientResult};

/// HTTP backend for making requests (holds reqwest client, auth, base URL).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) key_provider: ApiKeyProvider,
}

impl HttpBackend {
    /// GET `url` with the given query parameters; body must be a JSON object.
    pub(crate) async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<Value> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.dispatch(request).await
    }

    /// POST `body` as JSON to `url`; response body must be a JSON object.
    pub(crate) async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> ClientResult<Value> {
        self.dispatch(self.client.post(url).json(body)).await
    }

    /// Single request/response round trip. No retries: every failure surfaces
    /// immediately to the caller.
    async fn dispatch(&self, request: reqwest::RequestBuilder) -> ClientResult<Value> {
        let request = match self.key_provider.get_key() {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        match status.as_u16() {
            200..=299 => decode_object(response).await,

            401 | 403 => Err(ClientError::Auth {
                message: format!("server rejected api key (HTTP {})", status.as_u16()),
            }),

            _ => {
                let message = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(ClientError::Transport {
                    message: format!("HTTP {}: {}", status.as_u16(), message),
                })
            }
        }
    }
}

/// Decode the response body as JSON and require the minimally expected shape
/// (a top-level object); everything inside stays opaque.
async fn decode_object(response: reqwest::Response) -> ClientResult<Value> {
    let value: Value = response.json().await?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(ClientError::Decode {
            message: format!("expected a JSON object, got: {}", json_kind(&value)),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
