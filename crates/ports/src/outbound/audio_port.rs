//! Audio Port - Outbound port for playing sound cues at a player.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;

use scriptdialogue_domain::PlayerId;

use super::errors::HostError;

#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait AudioPort: Send + Sync {
    /// Play a sound, addressed by the host's sound identifier, for one
    /// player.
    async fn play_sound(&self, player: PlayerId, sound_id: &str) -> Result<(), HostError>;
}
