//! Error types surfaced by the outbound host ports.

use thiserror::Error;

use scriptdialogue_domain::{PlayerId, RejectReason};

/// Failure of a host operation (command, property, item or audio call).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("player {0} is not connected")]
    PlayerNotConnected(PlayerId),

    #[error("command failed: {0}")]
    CommandFailed(String),

    #[error("host error: {0}")]
    Other(String),
}

impl HostError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Failure while showing a form.
///
/// Adapters classify host exceptions into `Rejected` when the host gives
/// a recognized reason; everything else flows through as `Host`. The open
/// state machine copies a classified reason onto the rejected outcome and
/// treats any other error as unclassified.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("form rejected by host ({reason}): {message}")]
    Rejected {
        reason: RejectReason,
        message: String,
    },

    #[error(transparent)]
    Host(#[from] HostError),
}
