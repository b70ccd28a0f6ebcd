//! Application layer of the script dialogue library.
//!
//! Holds the three dialogue builders (dual button, multi button, input),
//! the capability trait they share, and the service that drives a
//! dialogue through the host's presentation ports.

pub mod application;

pub use application::dialogue::{
    callback, DialogueCallback, DualButton, DualButtonDialogue, InputDialogue, InputDropdown,
    InputElement, InputSlider, InputText, InputToggle, MultiButton, MultiButtonDialogue,
    ShowableDialogue,
};
pub use application::error::OpenError;
pub use application::services::ScriptDialogueService;
