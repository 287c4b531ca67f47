//! Error taxonomy for the orchestration core
//!
//! Two families of failure exist: device sensors (geolocation, battery) and
//! the answer engine (network text generation). Every call site converts
//! these into fixed fallback data for the state slot it owns, so none of
//! these types ever crosses the message channel to a surface. The HUD always
//! renders something.

use thiserror::Error;

/// Failures from device sensor capabilities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SensorError {
    /// The user or platform refused access to the sensor
    #[error("sensor access denied")]
    PermissionDenied,

    /// The capability is missing or disabled on this device
    #[error("sensor capability unavailable")]
    Unavailable,
}

/// Failures from the answer engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request failed in transit, or the service answered with an error
    #[error("answer engine request failed: {0}")]
    Service(String),

    /// The service answered, but the payload was not in a usable shape
    #[error("answer engine response was malformed: {0}")]
    Malformed(String),
}

impl EngineError {
    /// Wrap any displayable cause as a service failure
    pub fn service(err: impl std::fmt::Display) -> Self {
        Self::Service(err.to_string())
    }

    /// Flag a response that decoded but did not carry what we asked for
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed(detail.into())
    }
}

impl From<anyhow::Error> for EngineError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` flattens the full context chain into one line
        Self::Service(format!("{err:#}"))
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        Self::Service(err.to_string())
    }
}
