//! Player Property Port - Outbound port for the host's per-player
//! key/value store
//!
//! Properties persist with the player across sessions; the host owns the
//! storage. Used by the sample behaviors to remember one-shot grants.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;
use serde::{Deserialize, Serialize};

use scriptdialogue_domain::PlayerId;

use super::errors::HostError;

/// Value stored under a per-player property key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait PlayerPropertyPort: Send + Sync {
    /// Read a property, `None` when it was never set.
    async fn get_property(
        &self,
        player: PlayerId,
        key: &str,
    ) -> Result<Option<PropertyValue>, HostError>;

    /// Write a property.
    async fn set_property(
        &self,
        player: PlayerId,
        key: &str,
        value: PropertyValue,
    ) -> Result<(), HostError>;
}
