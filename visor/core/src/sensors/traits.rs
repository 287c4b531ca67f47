//! Device Sensor Traits
//!
//! Trait definitions for the device sensor bridge: battery observation and
//! one-shot geolocation. Capability absence is part of the contract, not an
//! error path: a machine without a readable battery returns `None` from
//! [`DeviceSensors::observe_battery`] and the HUD keeps its optimistic
//! default forever.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::SensorError;
use crate::state::BatteryStatus;

/// A geographic position fix
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees north, negative south
    pub latitude: f64,
    /// Degrees east, negative west
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a position fix
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Device sensor bridge trait
///
/// Implementations own the platform details; the orchestrator only sees the
/// capability surface.
#[async_trait]
pub trait DeviceSensors: Send + Sync {
    /// Begin observing battery changes
    ///
    /// Returns `None` when the capability is absent. Otherwise the returned
    /// receiver yields a status whenever level or charging state changes,
    /// starting with the current state. Dropping the receiver ends the
    /// observation; no update can land after teardown.
    fn observe_battery(&self) -> Option<mpsc::Receiver<BatteryStatus>>;

    /// Request the current position once
    ///
    /// No polling, no continuous tracking, no retry. The caller decides
    /// whether to ask again.
    async fn current_position(&self) -> Result<GeoPoint, SensorError>;
}
