//! Item Port - Outbound port for creating items in the world.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;

use scriptdialogue_domain::PlayerId;

use super::errors::HostError;

#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait ItemPort: Send + Sync {
    /// Instantiate a stack of the given item type and drop it at the
    /// player's current location.
    async fn spawn_item_at_player(
        &self,
        player: PlayerId,
        item_type_id: &str,
        amount: u32,
    ) -> Result<(), HostError>;
}
