//! Wire protocol for the annotation broadcast channel.
//!
//! One JSON object per broadcast call, discriminated by `type`. The channel
//! is best-effort: unordered, at-least-once, no delivery guarantee. Every
//! message is therefore designed to be safe under loss (state lags, never
//! corrupts), duplication (idempotent upsert/remove), and reordering
//! (handlers operate per-message on current state).

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::action::{ActionId, AnnotationAction};

/// Channel name used for all annotation traffic.
pub const ANNOTATION_CHANNEL: &str = "annotation";

/// Error returned by the wire codec.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A message could not be serialized to JSON.
    #[error("failed to encode annotation message: {0}")]
    Encode(#[source] serde_json::Error),
    /// Inbound bytes were not a valid annotation message.
    #[error("failed to decode annotation message: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Which authors a selective clear applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorScope {
    /// Everything, equivalent to a full clear.
    All,
    /// Only the named identity's actions are dropped.
    Teacher,
    /// Everything except the named identity's actions is dropped.
    Students,
}

/// A single message on the annotation channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WireMessage {
    /// Create or replace one action, keyed by its id.
    Annotate { action: AnnotationAction },
    /// Wipe local history and the remote cache everywhere.
    ClearAnnotations,
    /// Author-scoped clear, relative to `author_identity`.
    #[serde(rename_all = "camelCase")]
    ClearAnnotationsByType {
        author_type: AuthorScope,
        author_identity: String,
    },
    /// Remove one action everywhere.
    DeleteAnnotation { id: ActionId },
    /// Bootstrap snapshot for view-only joiners.
    #[serde(rename_all = "camelCase")]
    SyncAnnotations {
        history: Vec<AnnotationAction>,
        history_step: usize,
    },
}

/// Encode a message for the broadcast channel.
///
/// # Errors
///
/// Returns [`WireError::Encode`] if serialization fails.
pub fn encode_message(message: &WireMessage) -> Result<String, WireError> {
    serde_json::to_string(message).map_err(WireError::Encode)
}

/// Decode a message received from the broadcast channel.
///
/// # Errors
///
/// Returns [`WireError::Decode`] for malformed JSON, unknown `type` values,
/// or missing required fields. Receivers drop such messages and continue.
pub fn decode_message(payload: &str) -> Result<WireMessage, WireError> {
    serde_json::from_str(payload).map_err(WireError::Decode)
}
