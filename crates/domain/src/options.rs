//! Per-open configuration for showing a dialogue.

use crate::ids::PlayerId;

/// Lock the player's camera and movement while a dialogue is open.
pub const DEFAULT_LOCK_PLAYER_CAMERA: bool = true;
/// How many times to retry when the player is busy.
pub const DEFAULT_BUSY_RETRIES_COUNT: u32 = 5;
/// How many host ticks to wait between busy retries.
pub const DEFAULT_BUSY_RETRIES_TICK: u32 = 5;

/// Options used when opening a script dialogue.
///
/// Only the target player is required; unset fields fall back to the
/// defaults when resolved. Setters return a new value, the receiver is
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowDialogueOptions {
    /// Player to show the script dialogue to.
    pub player: PlayerId,
    /// Lock the camera while the dialogue is open. Prevents the camera
    /// from panning when moving the mouse or dragging on transitions.
    pub lock_player_camera: Option<bool>,
    /// How many times to retry the dialogue if the player is busy.
    pub busy_retries_count: Option<u32>,
    /// How long (in ticks) to wait between retries if the player is busy.
    pub busy_retries_tick: Option<u32>,
}

impl ShowDialogueOptions {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            lock_player_camera: None,
            busy_retries_count: None,
            busy_retries_tick: None,
        }
    }

    pub fn with_lock_player_camera(self, lock: bool) -> Self {
        Self {
            lock_player_camera: Some(lock),
            ..self
        }
    }

    pub fn with_busy_retries_count(self, count: u32) -> Self {
        Self {
            busy_retries_count: Some(count),
            ..self
        }
    }

    pub fn with_busy_retries_tick(self, ticks: u32) -> Self {
        Self {
            busy_retries_tick: Some(ticks),
            ..self
        }
    }

    /// Merge the caller-supplied overrides onto the defaults. Explicit
    /// values always win.
    pub fn resolve(self) -> ResolvedShowDialogueOptions {
        ResolvedShowDialogueOptions {
            player: self.player,
            lock_player_camera: self.lock_player_camera.unwrap_or(DEFAULT_LOCK_PLAYER_CAMERA),
            busy_retries_count: self.busy_retries_count.unwrap_or(DEFAULT_BUSY_RETRIES_COUNT),
            busy_retries_tick: self.busy_retries_tick.unwrap_or(DEFAULT_BUSY_RETRIES_TICK),
        }
    }
}

/// Fully resolved options, as used by the open state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedShowDialogueOptions {
    pub player: PlayerId,
    pub lock_player_camera: bool,
    pub busy_retries_count: u32,
    pub busy_retries_tick: u32,
}
