//! Surface Events
//!
//! Events sent from display surfaces to the HUD core. These represent
//! operator intent only; surfaces never mutate HUD state themselves.

use serde::{Deserialize, Serialize};

/// Events from a surface to the HUD core
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SurfaceEvent {
    /// Operator submitted a free-text query
    QuerySubmitted {
        /// The raw query text, untrimmed
        query: String,
    },

    /// Operator dismissed the current search result
    FeedCleared,

    /// Operator asked for a fresh weather pass
    WeatherRescanRequested,

    /// Operator toggled play/pause
    PlaybackToggled,

    /// Operator skipped to the next track
    TrackSkipped,

    /// Operator requested shutdown
    QuitRequested,
}

impl SurfaceEvent {
    /// Short name for logging
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::QuerySubmitted { .. } => "query_submitted",
            Self::FeedCleared => "feed_cleared",
            Self::WeatherRescanRequested => "weather_rescan_requested",
            Self::PlaybackToggled => "playback_toggled",
            Self::TrackSkipped => "track_skipped",
            Self::QuitRequested => "quit_requested",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let event = SurfaceEvent::QuerySubmitted {
            query: "status report".to_string(),
        };
        assert_eq!(event.name(), "query_submitted");
        assert_eq!(SurfaceEvent::QuitRequested.name(), "quit_requested");
    }
}
