//! Inbound ports - host events delivered into the library.

pub mod world_events;

pub use world_events::{ItemUseEvent, ItemUseHandlerPort, PlayerSpawnEvent, PlayerSpawnHandlerPort};

#[cfg(any(test, feature = "testing"))]
pub use world_events::{MockItemUseHandlerPort, MockPlayerSpawnHandlerPort};
