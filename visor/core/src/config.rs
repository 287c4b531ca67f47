//! TOML Configuration File Support
//!
//! Centralized configuration loading for the HUD, supporting a TOML file at
//! `~/.config/visor/visor.toml`.
//!
//! # Configuration Priority
//!
//! Values are loaded with the following priority (highest first):
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Default values
//!
//! The answer engine credential (`GEMINI_API_KEY`) is environment-only and
//! deliberately optional here: a missing key is not a configuration error,
//! it surfaces as an engine failure on first use.
//!
//! # Example Configuration
//!
//! ```toml
//! [engine]
//! model = "gemini-2.0-flash"
//!
//! [sensors]
//! latitude = 35.68
//! longitude = 139.69
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::DEFAULT_MODEL;
use crate::sensors::GeoPoint;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where configuration values came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Engine section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineToml {
    /// Model identifier for the answer engine
    pub model: Option<String>,
}

/// Sensors section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorsToml {
    /// Fixed latitude, skipping the geolocation lookup
    pub latitude: Option<f64>,

    /// Fixed longitude, skipping the geolocation lookup
    pub longitude: Option<f64>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisorToml {
    /// Engine configuration section
    pub engine: EngineToml,

    /// Sensors configuration section
    pub sensors: SensorsToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Centralized configuration for the HUD
#[derive(Clone, Debug)]
pub struct HudConfig {
    /// Answer engine credential, environment-only
    pub api_key: Option<String>,

    /// Answer engine model identifier
    pub model: String,

    /// Coordinate override for the weather resolver
    pub coords: Option<GeoPoint>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            coords: None,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl HudConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/visor/visor.toml` or `~/.config/visor/visor.toml`
/// if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("visor").join("visor.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed or fails
/// validation. A missing config file is not an error (defaults are used).
pub fn load_config() -> Result<HudConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read, parsed, or
/// validated.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<HudConfig, ConfigError> {
    let mut config = HudConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: VisorToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config)?;
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config);

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut HudConfig, toml: &VisorToml) -> Result<(), ConfigError> {
    if let Some(ref model) = toml.engine.model {
        config.model = model.clone();
    }

    match (toml.sensors.latitude, toml.sensors.longitude) {
        (Some(lat), Some(lon)) => {
            config.coords = Some(validated_coords(lat, lon)?);
        }
        (None, None) => {}
        _ => {
            return Err(ConfigError::ValidationError(
                "sensors.latitude and sensors.longitude must be set together".to_string(),
            ));
        }
    }

    Ok(())
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut HudConfig) {
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            config.api_key = Some(key);
        }
    }

    if let Ok(model) = std::env::var("VISOR_MODEL") {
        if !model.is_empty() {
            config.model = model;
            config.source = ConfigSource::Env;
        }
    }

    if let Ok(coords) = std::env::var("VISOR_COORDS") {
        match parse_coords(&coords) {
            Some(point) => {
                config.coords = Some(point);
                config.source = ConfigSource::Env;
            }
            None => {
                tracing::warn!(
                    value = %coords,
                    "VISOR_COORDS is not a valid \"lat,lon\" pair, ignoring"
                );
            }
        }
    }
}

/// Parse a `"lat,lon"` pair, rejecting out-of-range values
#[must_use]
pub fn parse_coords(value: &str) -> Option<GeoPoint> {
    let (lat, lon) = value.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    validated_coords(lat, lon).ok()
}

/// Range-check a coordinate pair
fn validated_coords(lat: f64, lon: f64) -> Result<GeoPoint, ConfigError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ConfigError::ValidationError(format!(
            "latitude {lat} is outside -90..=90"
        )));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ConfigError::ValidationError(format!(
            "longitude {lon} is outside -180..=180"
        )));
    }
    Ok(GeoPoint::new(lat, lon))
}

// =============================================================================
// Tests
// =============================================================================
