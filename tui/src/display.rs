//! Display State
//!
//! The render model: latest value of every HUD slot, mirrored from
//! [`HudMessage`]s plus a little surface-local state (status-line
//! notification, sign-off line).
//!
//! # Design Philosophy
//!
//! The TUI holds no orchestration logic. `apply_message` only copies what
//! the core sent; it never decides, retries, or falls back. If a rendering
//! question cannot be answered from this struct alone, the answer belongs
//! in the core, not here.

use std::time::Duration;

use visor_core::{
    BatteryStatus, ClockReading, FeedMode, HeadlineSet, HudLifecycle, HudMessage, NotifyLevel,
    PlaybackState, SearchSession, WeatherReading,
};

/// How long a status-line notification stays visible
const NOTIFICATION_TTL: Duration = Duration::from_secs(8);

/// A notification shown on the status line until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNotification {
    /// Severity, drives the status-line color
    pub level: NotifyLevel,
    /// Operator-facing text
    pub message: String,
}

/// Latest value of every HUD slot, ready to render
#[derive(Debug, Clone)]
pub struct DisplayState {
    /// Clock slot
    pub clock: ClockReading,
    /// Battery slot
    pub battery: BatteryStatus,
    /// Weather slot
    pub weather: WeatherReading,
    /// Headline slot
    pub headlines: HeadlineSet,
    /// Search slot
    pub search: SearchSession,
    /// Playback slot
    pub playback: PlaybackState,
    /// Core lifecycle, drives the status line and the quit check
    pub lifecycle: HudLifecycle,
    /// Current status-line notification, if any
    pub notification: Option<DisplayNotification>,
    /// Sign-off line carried by the core's quit message
    pub sign_off: Option<String>,
    /// Time since the current notification appeared
    notification_age: Duration,
}

impl DisplayState {
    /// Create a display state with the same boot placeholders the core seeds
    pub fn new() -> Self {
        Self {
            clock: ClockReading::now(),
            battery: BatteryStatus::default(),
            weather: WeatherReading::scanning(),
            headlines: HeadlineSet::empty(),
            search: SearchSession::idle(),
            playback: PlaybackState::default(),
            lifecycle: HudLifecycle::Initializing,
            notification: None,
            sign_off: None,
            notification_age: Duration::ZERO,
        }
    }

    /// Apply a message from the core, replacing the slot it names
    pub fn apply_message(&mut self, msg: HudMessage) {
        match msg {
            HudMessage::ClockUpdated { reading } => self.clock = reading,
            HudMessage::BatteryUpdated { status } => self.battery = status,
            HudMessage::WeatherUpdated { reading } => self.weather = reading,
            HudMessage::HeadlinesUpdated { headlines } => self.headlines = headlines,
            HudMessage::SearchUpdated { session } => self.search = session,
            HudMessage::PlaybackUpdated { playback } => self.playback = playback,
            HudMessage::Lifecycle { state } => self.lifecycle = state,
            HudMessage::Notify { level, message } => {
                self.notification = Some(DisplayNotification { level, message });
                self.notification_age = Duration::ZERO;
            }
            HudMessage::Quit { message } => {
                self.lifecycle = HudLifecycle::ShuttingDown;
                self.sign_off = message;
            }
        }
    }

    /// Advance surface-local timers by one frame
    pub fn update(&mut self, delta: Duration) {
        if self.notification.is_some() {
            self.notification_age = self.notification_age.saturating_add(delta);
            if self.notification_age >= NOTIFICATION_TTL {
                self.notification = None;
            }
        }
    }

    /// Which view the feed pane shows right now
    pub fn feed_mode(&self) -> FeedMode {
        FeedMode::select(&self.search)
    }

    /// Whether the core told us to wind down
    pub fn is_shutting_down(&self) -> bool {
        matches!(self.lifecycle, HudLifecycle::ShuttingDown)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use visor_core::Citation;

    // ======== Slot Mirroring Tests ========

    #[test]
    fn test_new_matches_boot_placeholders() {
        let display = DisplayState::new();

        assert_eq!(display.weather, WeatherReading::scanning());
        assert!(display.headlines.is_empty());
        assert!(display.search.is_idle());
        assert_eq!(display.battery.level, 100);
        assert!(display.battery.charging);
        assert_eq!(display.lifecycle, HudLifecycle::Initializing);
        assert_eq!(display.feed_mode(), FeedMode::Headlines);
    }

    #[test]
    fn test_slot_messages_replace_slots() {
        let mut display = DisplayState::new();

        display.apply_message(HudMessage::BatteryUpdated {
            status: BatteryStatus::new(42, false),
        });
        display.apply_message(HudMessage::WeatherUpdated {
            reading: WeatherReading::resolved("Osaka", "22\u{b0}C", "Clear"),
        });
        display.apply_message(HudMessage::HeadlinesUpdated {
            headlines: HeadlineSet::from_lines(["ALPHA", "BETA"]),
        });
        display.apply_message(HudMessage::PlaybackUpdated {
            playback: PlaybackState {
                track_index: 2,
                playing: false,
                progress: 57,
            },
        });

        assert_eq!(display.battery, BatteryStatus::new(42, false));
        assert_eq!(display.weather.location, "Osaka");
        assert_eq!(display.headlines.len(), 2);
        assert_eq!(display.playback.progress, 57);
        assert!(!display.playback.playing);
    }

    #[test]
    fn test_search_session_drives_feed_mode() {
        let mut display = DisplayState::new();

        display.apply_message(HudMessage::SearchUpdated {
            session: SearchSession::begin("net status"),
        });
        assert_eq!(display.feed_mode(), FeedMode::Querying);

        let mut session = SearchSession::begin("net status");
        session.resolve(
            "All relays nominal.",
            vec![Citation::new("Grid News", "https://example.com/grid")],
        );
        display.apply_message(HudMessage::SearchUpdated { session });
        assert_eq!(display.feed_mode(), FeedMode::SearchResult);
        assert_eq!(
            display.search.result_text.as_deref(),
            Some("All relays nominal.")
        );

        display.apply_message(HudMessage::SearchUpdated {
            session: SearchSession::idle(),
        });
        assert_eq!(display.feed_mode(), FeedMode::Headlines);
    }

    // ======== Lifecycle Tests ========

    #[test]
    fn test_lifecycle_messages_apply() {
        let mut display = DisplayState::new();

        display.apply_message(HudMessage::Lifecycle {
            state: HudLifecycle::Online,
        });
        assert_eq!(display.lifecycle, HudLifecycle::Online);
        assert!(!display.is_shutting_down());
    }

    #[test]
    fn test_quit_captures_sign_off_and_shuts_down() {
        let mut display = DisplayState::new();

        display.apply_message(HudMessage::Quit {
            message: Some("Link terminated.".to_string()),
        });

        assert!(display.is_shutting_down());
        assert_eq!(display.sign_off.as_deref(), Some("Link terminated."));
    }

    // ======== Notification Tests ========

    #[test]
    fn test_notification_appears_and_expires() {
        let mut display = DisplayState::new();

        display.apply_message(HudMessage::Notify {
            level: NotifyLevel::Warning,
            message: "Answer engine unreachable".to_string(),
        });
        assert!(display.notification.is_some());

        display.update(Duration::from_secs(3));
        assert!(display.notification.is_some());

        display.update(Duration::from_secs(6));
        assert!(display.notification.is_none());
    }

    #[test]
    fn test_new_notification_resets_the_clock() {
        let mut display = DisplayState::new();

        display.apply_message(HudMessage::Notify {
            level: NotifyLevel::Info,
            message: "first".to_string(),
        });
        display.update(Duration::from_secs(7));

        display.apply_message(HudMessage::Notify {
            level: NotifyLevel::Error,
            message: "second".to_string(),
        });
        display.update(Duration::from_secs(2));

        let current = display
            .notification
            .expect("second notification should survive");
        assert_eq!(current.message, "second");
        assert_eq!(current.level, NotifyLevel::Error);
    }
}
