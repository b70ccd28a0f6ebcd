//! Failure chain for a single open call.
//!
//! These errors never escape the service - they are flattened into a
//! rejected outcome so that callers always get a value back.

use thiserror::Error;

use scriptdialogue_domain::{DialogueError, RejectedResponse};
use scriptdialogue_ports::outbound::{HostError, PresentationError};

/// Anything that can go wrong between building the form and returning a
/// response.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error(transparent)]
    Dialogue(#[from] DialogueError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("dialogue callback failed: {0}")]
    Callback(#[source] anyhow::Error),
}

impl OpenError {
    /// Flatten into the rejected outcome. The innermost error becomes the
    /// cause so callers can downcast it directly; the reason is only
    /// populated when the host classified the failure.
    pub(crate) fn into_rejection(self) -> RejectedResponse {
        match self {
            OpenError::Presentation(PresentationError::Rejected { reason, message }) => {
                RejectedResponse {
                    reason: Some(reason),
                    cause: Box::new(PresentationError::Rejected { reason, message }),
                }
            }
            OpenError::Presentation(PresentationError::Host(host)) => RejectedResponse {
                reason: None,
                cause: Box::new(host),
            },
            OpenError::Dialogue(dialogue) => RejectedResponse {
                reason: None,
                cause: Box::new(dialogue),
            },
            OpenError::Host(host) => RejectedResponse {
                reason: None,
                cause: Box::new(host),
            },
            OpenError::Callback(callback) => RejectedResponse {
                reason: None,
                cause: callback.into(),
            },
        }
    }
}
