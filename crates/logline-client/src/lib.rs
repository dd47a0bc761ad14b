//! Client for the LogLineOS REST API.
//!
//! LogLineOS exposes an append-only event log over three HTTP endpoints; this
//! crate wraps them in a typed, stateless client:
//!
//! - `POST /append` — submit one [`AtomicEvent`]
//! - `GET /scan` — list events (server-defined semantics)
//! - `GET /query?trace_id=<id>` — fetch events for one trace
//!
//! Responses are opaque JSON objects owned by the server; the client does not
//! validate their schema, retry, or cache. Each operation is one independent
//! request/response round trip.
//!
//! # Quick Start
//!
//! ```no_run
//! use logline_client::{ApiClient, AtomicEvent, ClientResult};
//!
//! # async fn example() -> ClientResult<()> {
//! let client = ApiClient::from_env()?;
//!
//! let event = AtomicEvent::new("function", "run_code", "add", "rust-client")
//!     .with_trace_id("demo-123");
//! let result = client.append(&event).await?;
//! println!("append result: {result}");
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `LOGLINE_API_URL` | Base URL of the server (default: `http://localhost:8000`) |
//! | `LOGLINE_API_KEY` | API key, sent as `x-api-key` on every request |
//! | `LOGLINE_TIMEOUT_SECS` | Per-request timeout in seconds (default: transport default) |

pub mod auth;
pub mod client;
pub mod error;
pub mod event;
pub mod types;

// Re-export main types
pub use auth::{ApiKeyProvider, API_KEY_HEADER};
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use event::{AtomicEvent, Did, EventMetadata};
pub use types::ClientConfig;
