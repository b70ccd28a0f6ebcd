//! Port definitions for the script dialogue library.
//!
//! Outbound ports abstract the host runtime (form presentation, commands,
//! scheduling, audio, per-player properties, item placement) so the core
//! never depends on a concrete scripting API. Inbound ports are the event
//! handlers the sample behaviors implement.
//!
//! Enable the `testing` feature to get mockall mocks for every port.

pub mod inbound;
pub mod outbound;
