//! HUD Messages
//!
//! Messages sent from the HUD core to display surfaces. These represent all
//! the ways the orchestration layer can communicate with any connected
//! surface (TUI, web, test harness).
//!
//! # Design Philosophy
//!
//! The core is the "brain" that owns every data slot and every timer.
//! Surfaces are pure renderers that mirror what the core tells them. Slot
//! updates carry the whole new slot value, never a delta, so a surface that
//! missed a message is consistent again after the next one.

use serde::{Deserialize, Serialize};

use crate::playback::PlaybackState;
use crate::state::{BatteryStatus, ClockReading, HeadlineSet, SearchSession, WeatherReading};

/// Messages from the HUD core to a surface
///
/// These messages tell the surface what to display. The surface should not
/// have any business logic, just render what it is told.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum HudMessage {
    // ============================================
    // Slot Updates
    // ============================================
    /// The clock ticked
    ClockUpdated {
        /// The new reading
        reading: ClockReading,
    },

    /// The battery level or charging state changed
    BatteryUpdated {
        /// The new status
        status: BatteryStatus,
    },

    /// A weather resolution attempt settled
    WeatherUpdated {
        /// The new reading, live or fallback
        reading: WeatherReading,
    },

    /// The headline list loaded or fell back
    HeadlinesUpdated {
        /// The new headline set
        headlines: HeadlineSet,
    },

    /// The search session changed shape
    SearchUpdated {
        /// The whole session as it now stands
        session: SearchSession,
    },

    /// Playback progressed or the transport state changed
    PlaybackUpdated {
        /// The new playback state
        playback: PlaybackState,
    },

    // ============================================
    // System Messages
    // ============================================
    /// HUD lifecycle change
    Lifecycle {
        /// The new lifecycle state
        state: HudLifecycle,
    },

    /// Operator-facing notification for the status line
    ///
    /// Slot fallbacks are not notifications; they arrive as ordinary slot
    /// updates and render as data.
    Notify {
        /// Notification level
        level: NotifyLevel,
        /// Message content
        message: String,
    },

    /// Request the surface to quit
    Quit {
        /// Optional sign-off message
        message: Option<String>,
    },
}

/// HUD lifecycle states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HudLifecycle {
    /// Starting up, sources not yet running
    Initializing,
    /// All sources started
    Online,
    /// Shutting down
    ShuttingDown,
}

impl HudLifecycle {
    /// Human-readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Initializing => "Starting up...",
            Self::Online => "Online",
            Self::ShuttingDown => "Shutting down...",
        }
    }
}

/// Notification levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyLevel {
    /// Informational
    Info,
    /// Warning
    Warning,
    /// Error
    Error,
    /// Success
    Success,
}
