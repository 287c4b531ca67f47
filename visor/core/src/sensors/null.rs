//! Null Sensor Implementation
//!
//! The always-available stand-in for platforms with no sensors at all:
//! battery capability absent, position permanently unavailable. Headless
//! runs and tests use this instead of sprinkling capability checks around
//! the orchestrator.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::traits::{DeviceSensors, GeoPoint};
use crate::error::SensorError;
use crate::state::BatteryStatus;

/// Sensors that report nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSensors;

#[async_trait]
impl DeviceSensors for NullSensors {
    fn observe_battery(&self) -> Option<mpsc::Receiver<BatteryStatus>> {
        None
    }

    async fn current_position(&self) -> Result<GeoPoint, SensorError> {
        Err(SensorError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_sensors_report_nothing() {
        let sensors = NullSensors;
        assert!(sensors.observe_battery().is_none());
        assert_eq!(
            sensors.current_position().await.unwrap_err(),
            SensorError::Unavailable
        );
    }
}
