//! Core domain types for the script dialogue library.
//!
//! Everything in this crate is a plain value: script text, per-open
//! options, player identity and the unified response model. No I/O and no
//! async - those live behind the port traits in `scriptdialogue-ports`.

pub mod error;
pub mod ids;
pub mod options;
pub mod response;
pub mod text;

pub use error::DialogueError;
pub use ids::PlayerId;
pub use options::{
    ResolvedShowDialogueOptions, ShowDialogueOptions, DEFAULT_BUSY_RETRIES_COUNT,
    DEFAULT_BUSY_RETRIES_TICK, DEFAULT_LOCK_PLAYER_CAMERA,
};
pub use response::{
    ButtonDialogueResponse, CancelationReason, CanceledResponse, DialogueCause, DialogueOutcome,
    InputDialogueResponse, InputValue, RejectReason, RejectedResponse,
};
pub use text::ScriptText;
