//! Inbound world events and the handler traits the sample behaviors
//! implement.
//!
//! The host's event adapter subscribes to the native notifications and
//! forwards them here; handlers return a result so the adapter can log
//! failures without any behavior needing to know how events arrive.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;

use scriptdialogue_domain::PlayerId;

/// A player finished using an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUseEvent {
    pub player: PlayerId,
    /// Type identity of the used item stack, e.g. `studioname_packname:guide`.
    pub item_type_id: String,
}

/// A player spawned into the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpawnEvent {
    pub player: PlayerId,
}

#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait ItemUseHandlerPort: Send + Sync {
    async fn on_item_use(&self, event: ItemUseEvent) -> anyhow::Result<()>;
}

#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait PlayerSpawnHandlerPort: Send + Sync {
    async fn on_player_spawn(&self, event: PlayerSpawnEvent) -> anyhow::Result<()>;
}
