//! Scheduler Port - Cooperative tick-based delays
//!
//! The host runs a single logic thread on a fixed tick cadence; waiting
//! means yielding back to its scheduler, never blocking. All delays in
//! the dialogue core (currently only the busy-retry interval) go through
//! this port so tests can run them instantly.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait SchedulerPort: Send + Sync {
    /// Suspend for the given number of host ticks.
    async fn wait_ticks(&self, ticks: u32);
}
