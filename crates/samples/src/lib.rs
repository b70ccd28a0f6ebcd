//! Sample behaviors wired on top of the script dialogue library.
//!
//! Two small services show the intended usage: opening a guide dialogue
//! when a specific item is used, and granting that item once per player.
//! Both implement the inbound handler ports; the host's event adapter
//! delivers the native notifications to them.

pub mod services;

pub use services::{
    GiveItemOnce, GiveItemOnceOptions, ShowDialogueOnItemUse, ShowDialogueOnItemUseOptions,
};
