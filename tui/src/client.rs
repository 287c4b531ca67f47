//! HUD Client
//!
//! Thin wrapper around the core [`Hud`] for TUI integration. The client
//! embeds the core directly (no network) and provides a small interface
//! for sending surface events and draining outbound messages.
//!
//! # Architecture
//!
//! The TUI is a "thin client" - it contains no HUD logic. Its job is:
//! 1. Convert terminal events to SurfaceEvents
//! 2. Send SurfaceEvents to the core
//! 3. Drain HudMessages
//! 4. Render display state built from those messages

use tokio::sync::mpsc;

use visor_core::{
    load_config, GeminiEngine, Hud, HudConfig, HudMessage, HudState, SurfaceEvent, SystemSensors,
};

/// Client for communicating with the embedded HUD core
pub struct HudClient {
    /// The embedded core instance
    hud: Hud<GeminiEngine, SystemSensors>,
    /// Receiver for messages from the core
    rx: mpsc::Receiver<HudMessage>,
    /// Set when the config file existed but could not be used
    config_warning: Option<String>,
}

impl HudClient {
    /// Create a new client with an embedded core
    ///
    /// A broken config file is downgraded to a warning here; the HUD always
    /// comes up, on defaults if it must.
    pub fn new() -> Self {
        // Channel for core -> TUI messages
        let (tx, rx) = mpsc::channel(100);

        let (config, config_warning) = match load_config() {
            Ok(config) => (config, None),
            Err(e) => {
                tracing::warn!("Falling back to default configuration: {e}");
                (HudConfig::default(), Some(format!("Config ignored: {e}")))
            }
        };

        let engine = GeminiEngine::from_config(&config);
        let sensors = SystemSensors::from_config(&config);
        let hud = Hud::new(engine, sensors, config, tx);

        Self {
            hud,
            rx,
            config_warning,
        }
    }

    /// Take the config-load warning, if one was recorded
    pub fn take_config_warning(&mut self) -> Option<String> {
        self.config_warning.take()
    }

    /// Start the core (seed slots, launch tickers and startup loads)
    pub async fn start(&mut self) -> anyhow::Result<()> {
        self.hud.start().await
    }

    /// Submit a free-text query
    pub async fn submit_query(&mut self, query: String) -> anyhow::Result<()> {
        self.hud
            .handle_event(SurfaceEvent::QuerySubmitted { query })
            .await
    }

    /// Dismiss the search result and return the feed to headlines
    pub async fn clear_feed(&mut self) -> anyhow::Result<()> {
        self.hud.handle_event(SurfaceEvent::FeedCleared).await
    }

    /// Re-run the weather resolution on demand
    pub async fn rescan_weather(&mut self) -> anyhow::Result<()> {
        self.hud
            .handle_event(SurfaceEvent::WeatherRescanRequested)
            .await
    }

    /// Toggle play/pause
    pub async fn toggle_playback(&mut self) -> anyhow::Result<()> {
        self.hud.handle_event(SurfaceEvent::PlaybackToggled).await
    }

    /// Advance to the next track
    pub async fn skip_track(&mut self) -> anyhow::Result<()> {
        self.hud.handle_event(SurfaceEvent::TrackSkipped).await
    }

    /// Ask the core to shut down
    pub async fn request_quit(&mut self) -> anyhow::Result<()> {
        self.hud.handle_event(SurfaceEvent::QuitRequested).await
    }

    /// Commit settled source results (must be called regularly)
    pub async fn poll(&mut self) {
        self.hud.poll().await;
    }

    /// Try to receive one message from the core (non-blocking)
    pub fn try_recv(&mut self) -> Option<HudMessage> {
        self.rx.try_recv().ok()
    }

    /// Receive all pending messages from the core (non-blocking)
    pub fn recv_all(&mut self) -> Vec<HudMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// The core's current composite state
    pub fn state(&self) -> &HudState {
        self.hud.state()
    }
}

impl Default for HudClient {
    fn default() -> Self {
        Self::new()
    }
}
