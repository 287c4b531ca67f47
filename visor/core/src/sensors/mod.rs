//! Device Sensor Integration
//!
//! This module provides abstracted access to device sensors (battery,
//! geolocation) through a common trait interface.
//!
//! # Available Implementations
//!
//! - **SystemSensors**: sysfs battery polling plus IP geolocation (default)
//! - **NullSensors**: no capabilities at all, for headless runs and tests
//!
//! # Usage
//!
//! ```ignore
//! use visor_core::sensors::{DeviceSensors, SystemSensors};
//!
//! let sensors = SystemSensors::new();
//! if let Some(mut battery) = sensors.observe_battery() {
//!     while let Some(status) = battery.recv().await {
//!         println!("{}% charging={}", status.level, status.charging);
//!     }
//! }
//! ```

mod null;
mod system;
mod traits;

pub use null::NullSensors;
pub use system::SystemSensors;
pub use traits::{DeviceSensors, GeoPoint};
