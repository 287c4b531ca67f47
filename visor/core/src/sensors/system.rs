//! System Sensor Implementation
//!
//! Device sensors for a Linux host.
//!
//! Battery state comes from `/sys/class/power_supply/BAT*`. The kernel
//! exposes no change notification there, so a small poll task reads the
//! `capacity` and `status` files every few seconds and forwards a status
//! only when something actually changed. The task exits as soon as the
//! receiver is dropped.
//!
//! Position comes from a configured coordinate override when present, else
//! from a one-shot IP geolocation lookup. Either way it is a single fix; the
//! caller owns any retry policy.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::traits::{DeviceSensors, GeoPoint};
use crate::config::HudConfig;
use crate::error::SensorError;
use crate::state::BatteryStatus;

const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";
const GEOIP_URL: &str = "http://ip-api.com/json?fields=status,lat,lon";

/// Cadence of the battery poll task
const BATTERY_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Sensors backed by sysfs and an IP geolocation service
#[derive(Clone)]
pub struct SystemSensors {
    /// First `BAT*` entry found under the power supply root, if any
    battery_dir: Option<PathBuf>,
    /// Coordinate override; skips the network lookup entirely
    coords_override: Option<GeoPoint>,
    /// Poll cadence, shortened in tests
    poll_interval: Duration,
    /// HTTP client for the geolocation lookup
    http_client: reqwest::Client,
}

impl SystemSensors {
    /// Probe the platform and build the sensor bridge
    #[must_use]
    pub fn new() -> Self {
        Self {
            battery_dir: find_battery_dir(Path::new(POWER_SUPPLY_ROOT)),
            coords_override: None,
            poll_interval: BATTERY_POLL_INTERVAL,
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Build from loaded configuration
    #[must_use]
    pub fn from_config(config: &HudConfig) -> Self {
        Self {
            coords_override: config.coords,
            ..Self::new()
        }
    }

    /// Override the battery directory (tests point this at a temp tree)
    #[must_use]
    pub fn with_battery_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.battery_dir = Some(dir.into());
        self
    }

    /// Override the poll cadence
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set a coordinate override
    #[must_use]
    pub fn with_coords(mut self, coords: GeoPoint) -> Self {
        self.coords_override = Some(coords);
        self
    }

    /// One-shot IP geolocation lookup
    async fn lookup_position(&self) -> Result<GeoPoint, SensorError> {
        let response = self
            .http_client
            .get(GEOIP_URL)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "geolocation lookup failed to send");
                SensorError::Unavailable
            })?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "geolocation lookup rejected");
            return Err(SensorError::Unavailable);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| SensorError::Unavailable)?;

        if data.get("status").and_then(|s| s.as_str()) != Some("success") {
            return Err(SensorError::Unavailable);
        }

        let lat = data
            .get("lat")
            .and_then(serde_json::Value::as_f64)
            .ok_or(SensorError::Unavailable)?;
        let lon = data
            .get("lon")
            .and_then(serde_json::Value::as_f64)
            .ok_or(SensorError::Unavailable)?;

        Ok(GeoPoint::new(lat, lon))
    }
}

impl Default for SystemSensors {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceSensors for SystemSensors {
    fn observe_battery(&self) -> Option<mpsc::Receiver<BatteryStatus>> {
        let dir = self.battery_dir.clone()?;
        let interval = self.poll_interval;
        let (tx, rx) = mpsc::channel(8);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            let mut last: Option<BatteryStatus> = None;

            loop {
                ticker.tick().await;

                let Some(status) = read_battery(&dir).await else {
                    // Transient read failure; keep the last known state
                    continue;
                };

                if last == Some(status) {
                    continue;
                }
                last = Some(status);

                if tx.send(status).await.is_err() {
                    // Receiver dropped, observation over
                    return;
                }
            }
        });

        Some(rx)
    }

    async fn current_position(&self) -> Result<GeoPoint, SensorError> {
        if let Some(coords) = self.coords_override {
            return Ok(coords);
        }
        self.lookup_position().await
    }
}

/// Find the first `BAT*` entry under the power supply root
fn find_battery_dir(root: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(root).ok()?;
    let mut batteries: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("BAT"))
        })
        .collect();
    batteries.sort();
    batteries.into_iter().next()
}

/// Read one battery status snapshot from a sysfs-style directory
async fn read_battery(dir: &Path) -> Option<BatteryStatus> {
    let capacity = tokio::fs::read_to_string(dir.join("capacity")).await.ok()?;
    let status = tokio::fs::read_to_string(dir.join("status")).await.ok()?;

    let level: u8 = capacity.trim().parse().ok()?;
    // "Full" still means wall power is attached
    let charging = matches!(status.trim(), "Charging" | "Full");

    Some(BatteryStatus::new(level, charging))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_battery(dir: &Path, capacity: &str, status: &str) {
        std::fs::write(dir.join("capacity"), capacity).unwrap();
        std::fs::write(dir.join("status"), status).unwrap();
    }

    #[tokio::test]
    async fn test_read_battery_parses_sysfs_files() {
        let dir = tempfile::tempdir().unwrap();
        write_battery(dir.path(), "87\n", "Discharging\n");

        let status = read_battery(dir.path()).await.unwrap();
        assert_eq!(status, BatteryStatus::new(87, false));

        write_battery(dir.path(), "100\n", "Full\n");
        let status = read_battery(dir.path()).await.unwrap();
        assert_eq!(status, BatteryStatus::new(100, true));
    }

    #[tokio::test]
    async fn test_read_battery_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_battery(dir.path()).await.is_none());
    }

    #[tokio::test]
    async fn test_observe_battery_emits_on_change_only() {
        let dir = tempfile::tempdir().unwrap();
        write_battery(dir.path(), "80", "Discharging");

        let sensors = SystemSensors::new()
            .with_battery_dir(dir.path())
            .with_poll_interval(Duration::from_millis(10));

        let mut rx = sensors.observe_battery().expect("battery dir was set");

        // First poll always reports
        let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for first status")
            .unwrap();
        assert_eq!(first, BatteryStatus::new(80, false));

        // Unchanged polls stay quiet; a change comes through
        write_battery(dir.path(), "79", "Discharging");
        let second = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for changed status")
            .unwrap();
        assert_eq!(second, BatteryStatus::new(79, false));
    }

    #[tokio::test]
    async fn test_no_battery_capability_is_none() {
        let sensors = SystemSensors {
            battery_dir: None,
            ..SystemSensors::new()
        };
        assert!(sensors.observe_battery().is_none());
    }

    #[tokio::test]
    async fn test_coords_override_skips_lookup() {
        let sensors = SystemSensors::new().with_coords(GeoPoint::new(35.68, 139.69));
        let point = sensors.current_position().await.unwrap();
        assert!((point.latitude - 35.68).abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_battery_dir_picks_bat_entries() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("AC")).unwrap();
        std::fs::create_dir(root.path().join("BAT1")).unwrap();
        std::fs::create_dir(root.path().join("BAT0")).unwrap();

        let found = find_battery_dir(root.path()).unwrap();
        assert!(found.ends_with("BAT0"));
    }

    #[test]
    fn test_find_battery_dir_none_without_batteries() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("AC")).unwrap();
        assert!(find_battery_dir(root.path()).is_none());
    }
}
