//! Player Port - Outbound port for per-player host operations
//!
//! Covers what the dialogue core needs to know about a recipient: their
//! display name (commands are name-addressed), whether they are still a
//! valid connected entity, and the ability to run a command against them.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;

use scriptdialogue_domain::PlayerId;

use super::errors::HostError;

#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait PlayerPort: Send + Sync {
    /// The player's display name, as used to address commands.
    async fn player_name(&self, player: PlayerId) -> Result<String, HostError>;

    /// Whether the player is still a valid, connected entity.
    async fn is_valid(&self, player: PlayerId) -> bool;

    /// Run a host command against the player.
    async fn run_command(&self, player: PlayerId, command: &str) -> Result<(), HostError>;
}
