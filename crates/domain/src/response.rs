//! Unified outcome model for script dialogues.
//!
//! Every call to open a dialogue ends in exactly one of three ways: the
//! player answered (a variant-specific response), the dialogue was
//! canceled (player closed it or stayed busy), or it was rejected (some
//! error was raised while showing or processing it). Rejections never
//! escape as errors - they are returned as values.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Underlying error preserved on a rejected dialogue.
pub type DialogueCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why the presentation layer canceled a dialogue instead of showing it
/// through. Passed through unmodified, except that `UserBusy` drives the
/// busy-retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancelationReason {
    /// The host was already mid-interaction with the player.
    UserBusy,
    /// The player pressed the close button.
    UserClosed,
}

impl fmt::Display for CancelationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelationReason::UserBusy => write!(f, "UserBusy"),
            CancelationReason::UserClosed => write!(f, "UserClosed"),
        }
    }
}

/// Known reasons the host gives for rejecting a form outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The host considered the form configuration malformed.
    MalformedForm,
    /// The player disconnected before the form could be shown.
    PlayerDisconnected,
    /// The server is shutting down.
    ServerShutdown,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MalformedForm => write!(f, "MalformedForm"),
            RejectReason::PlayerDisconnected => write!(f, "PlayerDisconnected"),
            RejectReason::ServerShutdown => write!(f, "ServerShutdown"),
        }
    }
}

/// The dialogue was canceled by the player or the environment. A normal
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanceledResponse {
    pub reason: CancelationReason,
}

/// The dialogue failed while being shown or processed.
///
/// `reason` is only present when the host classified the failure;
/// `cause` always carries the raw error and can be downcast to inspect
/// it (for example to [`crate::DialogueError`] for misconfiguration).
#[derive(Debug)]
pub struct RejectedResponse {
    pub reason: Option<RejectReason>,
    pub cause: DialogueCause,
}

/// Response from a button dialogue: which button was pressed, and what
/// its callback returned if it had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDialogueResponse<C = ()> {
    /// Selected button's name.
    pub selected: String,
    /// Value produced by the selected button's callback, when present.
    pub callback: Option<C>,
}

/// Value entered into a single input element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl InputValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InputValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            InputValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Response from an input dialogue, keyed by each element's name.
///
/// Elements sharing a name overwrite each other in declaration order;
/// the last one wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputDialogueResponse {
    pub values: HashMap<String, InputValue>,
}

impl InputDialogueResponse {
    pub fn value(&self, name: &str) -> Option<&InputValue> {
        self.values.get(name)
    }
}

/// Final outcome of opening a script dialogue.
#[derive(Debug)]
pub enum DialogueOutcome<T> {
    /// The player answered; `T` is the variant-specific response.
    Response(T),
    Canceled(CanceledResponse),
    Rejected(RejectedResponse),
}

impl<T> DialogueOutcome<T> {
    pub fn canceled(reason: CancelationReason) -> Self {
        Self::Canceled(CanceledResponse { reason })
    }

    pub fn rejected(reason: Option<RejectReason>, cause: DialogueCause) -> Self {
        Self::Rejected(RejectedResponse { reason, cause })
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Self::Response(_))
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn response(&self) -> Option<&T> {
        match self {
            Self::Response(response) => Some(response),
            _ => None,
        }
    }

    pub fn into_response(self) -> Option<T> {
        match self {
            Self::Response(response) => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let outcome: DialogueOutcome<ButtonDialogueResponse> =
            DialogueOutcome::Response(ButtonDialogueResponse {
                selected: "exit".to_string(),
                callback: None,
            });

        assert!(outcome.is_response());
        assert_eq!(
            outcome.response().map(|r| r.selected.as_str()),
            Some("exit")
        );
    }

    #[test]
    fn test_canceled_outcome_keeps_reason() {
        let outcome: DialogueOutcome<()> = DialogueOutcome::canceled(CancelationReason::UserClosed);

        match outcome {
            DialogueOutcome::Canceled(canceled) => {
                assert_eq!(canceled.reason, CancelationReason::UserClosed);
            }
            _ => panic!("expected canceled outcome"),
        }
    }

    #[test]
    fn test_input_value_conversions() {
        assert_eq!(InputValue::from(true).as_bool(), Some(true));
        assert_eq!(InputValue::from(3.0).as_number(), Some(3.0));
        assert_eq!(InputValue::from("abc").as_text(), Some("abc"));
        assert_eq!(InputValue::from(true).as_text(), None);
    }

    #[test]
    fn test_input_value_untagged_serde() {
        let json = serde_json::to_value(InputValue::from("water")).expect("serialize");
        assert_eq!(json, serde_json::json!("water"));

        let value: InputValue = serde_json::from_value(serde_json::json!(2.5)).expect("deserialize");
        assert_eq!(value, InputValue::Number(2.5));
    }
}
