//! Error types raised by the dialogue library itself.
//!
//! These surface to callers as the `cause` of a rejected outcome, never
//! as a panic or a raw `Err` from the open call.

use thiserror::Error;

/// Misconfiguration or malformed-response errors from dialogue handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialogueError {
    /// A multi button dialogue was opened without any buttons.
    #[error("missing buttons")]
    MissingButtons,

    /// An input dialogue was opened without any elements.
    #[error("missing input elements")]
    MissingElements,

    /// The raw response did not line up with the dialogue definition.
    #[error("malformed form response: {0}")]
    MalformedResponse(String),
}

impl DialogueError {
    /// Create a malformed-response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}
