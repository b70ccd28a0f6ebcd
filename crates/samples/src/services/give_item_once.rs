//! Grant an item to each player exactly once.
//!
//! The grant is remembered in the host's per-player property store under
//! `<item_type_id>_given`, so it survives the player leaving and
//! rejoining.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use scriptdialogue_ports::inbound::{PlayerSpawnEvent, PlayerSpawnHandlerPort};
use scriptdialogue_ports::outbound::{ItemPort, PlayerPropertyPort, PropertyValue};

/// Configuration for the one-time grant behavior.
#[derive(Debug, Clone)]
pub struct GiveItemOnceOptions {
    /// Item type to grant, e.g. `studioname_packname:guide`.
    pub item_type_id: String,
}

pub struct GiveItemOnce {
    item_type_id: String,
    given_property: String,
    properties: Arc<dyn PlayerPropertyPort>,
    items: Arc<dyn ItemPort>,
}

impl GiveItemOnce {
    pub fn new(
        options: GiveItemOnceOptions,
        properties: Arc<dyn PlayerPropertyPort>,
        items: Arc<dyn ItemPort>,
    ) -> Self {
        let given_property = format!("{}_given", options.item_type_id);
        Self {
            item_type_id: options.item_type_id,
            given_property,
            properties,
            items,
        }
    }
}

#[async_trait]
impl PlayerSpawnHandlerPort for GiveItemOnce {
    #[instrument(skip(self), fields(player = %event.player))]
    async fn on_player_spawn(&self, event: PlayerSpawnEvent) -> anyhow::Result<()> {
        let already_given = self
            .properties
            .get_property(event.player, &self.given_property)
            .await?
            .is_some();
        if already_given {
            return Ok(());
        }

        self.items
            .spawn_item_at_player(event.player, &self.item_type_id, 1)
            .await?;
        self.properties
            .set_property(
                event.player,
                &self.given_property,
                PropertyValue::Number(1.0),
            )
            .await?;

        debug!(item = %self.item_type_id, "granted one-time item");
        Ok(())
    }
}
