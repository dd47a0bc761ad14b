//! The atomic event record submitted to `/append`.
//!
//! An atomic event is a self-contained, immutable description of one
//! intent/action. It is constructed once, serialized to JSON, and handed to
//! the server; the client never mutates or persists it afterwards.
//!
//! The server's full schema for `input` and `metadata` is not fixed by the
//! protocol, so both are kept open: `input` is a raw JSON map and `metadata`
//! carries unknown keys alongside the required `trace_id`/`created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One immutable record submitted to the log service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicEvent {
    /// Category tag (e.g., "function").
    pub entity_type: String,

    /// Intended operation (e.g., "run_code").
    pub intent: String,

    /// Subject/target of the operation.
    pub this: String,

    /// Who performed what.
    pub did: Did,

    /// Operation-specific arguments (server schema not assumed fixed).
    #[serde(default)]
    pub input: Map<String, Value>,

    /// Correlation metadata.
    pub metadata: EventMetadata,
}

/// Caller attribution for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Did {
    /// Identity of the caller.
    pub actor: String,

    /// Action performed; mirrors the intent-level operation.
    pub action: String,
}

/// Event metadata: required correlation fields plus an open bag for
/// forward compatibility with server-side additions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Caller-supplied correlation identifier.
    pub trace_id: String,

    /// When the event was created (serialized as RFC 3339 UTC, `Z` suffix).
    pub created_at: DateTime<Utc>,

    /// Unknown metadata keys, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AtomicEvent {
    /// Create an event with `did.action` mirroring the intent and a metadata
    /// block stamped `Utc::now()`. The trace id defaults to empty; set it with
    /// [`with_trace_id`](Self::with_trace_id) before appending.
    pub fn new(
        entity_type: impl Into<String>,
        intent: impl Into<String>,
        this: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        let intent = intent.into();
        Self {
            entity_type: entity_type.into(),
            this: this.into(),
            did: Did {
                actor: actor.into(),
                action: intent.clone(),
            },
            intent,
            input: Map::new(),
            metadata: EventMetadata {
                trace_id: String::new(),
                created_at: Utc::now(),
                extra: Map::new(),
            },
        }
    }

    /// Set the operation arguments.
    pub fn with_input(mut self, input: Map<String, Value>) -> Self {
        self.input = input;
        self
    }

    /// Set the trace id.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.metadata.trace_id = trace_id.into();
        self
    }

    /// Replace the whole metadata block.
    pub fn with_metadata(mut self, metadata: EventMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
