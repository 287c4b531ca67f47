//! Visor Core - Headless HUD Orchestration
//!
//! This crate provides the core orchestration logic for visor, completely
//! independent of any UI framework. It can drive a TUI, a web surface, or
//! run headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Surfaces                                │
//! │        ┌─────────┐   ┌─────────┐   ┌──────────────┐          │
//! │        │   TUI   │   │  WebUI  │   │   Headless   │          │
//! │        │(ratatui)│   │         │   │  (tests)     │          │
//! │        └────┬────┘   └────┬────┘   └──────┬───────┘          │
//! │             └─────────────┴───────────────┘                   │
//! │                           │                                   │
//! │                   SurfaceEvent (up)                          │
//! │                    HudMessage (down)                         │
//! │                           │                                   │
//! └───────────────────────────┼───────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼───────────────────────────────────┐
//! │                       VISOR CORE                              │
//! │  ┌────────────────────────┴────────────────────────────────┐  │
//! │  │                        Hud                               │  │
//! │  │  ┌───────┐ ┌─────────┐ ┌─────────┐ ┌────────────────┐  │  │
//! │  │  │ Clock │ │ Weather │ │  Feed   │ │  Answer Engine  │  │  │
//! │  │  │Battery│ │  Pass   │ │ Search  │ │    (Gemini)     │  │  │
//! │  │  └───────┘ └─────────┘ └─────────┘ └────────────────┘  │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Hud`]: The orchestrator that owns all display state and timers
//! - [`HudMessage`]: Messages sent from the HUD core to surfaces
//! - [`SurfaceEvent`]: Events sent from surfaces to the HUD core
//! - [`HudState`]: Every display slot in one place
//! - [`AnswerEngine`]: The text/answer provider abstraction
//! - [`DeviceSensors`]: The battery and geolocation abstraction
//!
//! # Quick Start
//!
//! ```ignore
//! use visor_core::{load_config, GeminiEngine, Hud, SurfaceEvent, SystemSensors};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (tx, mut rx) = mpsc::channel(100);
//!
//!     let config = load_config().unwrap();
//!     let engine = GeminiEngine::from_config(&config);
//!     let sensors = SystemSensors::from_config(&config);
//!     let mut hud = Hud::new(engine, sensors, config, tx);
//!
//!     hud.start().await.unwrap();
//!
//!     loop {
//!         // Render messages from the HUD core
//!         while let Ok(msg) = rx.try_recv() {
//!             // Apply msg to the display
//!         }
//!
//!         // Commit settled source updates
//!         hud.poll().await;
//!
//!         // Translate user input into SurfaceEvents
//!         // hud.handle_event(SurfaceEvent::PlaybackToggled).await;
//!     }
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`config`]: Layered configuration (env over file over defaults)
//! - [`engine`]: Answer engine abstraction and the Gemini implementation
//! - [`error`]: Sensor and engine error taxonomies
//! - [`events`]: Events from surfaces to the HUD core
//! - [`feed`]: Display-mode selection for the shared feed region
//! - [`hud`]: The orchestrator
//! - [`messages`]: Messages from the HUD core to surfaces
//! - [`news`]: One-shot startup headline load
//! - [`playback`]: Simulated media playback
//! - [`search`]: Monotonic request tickets for stale-response suppression
//! - [`sensors`]: Battery and geolocation abstraction and implementations
//! - [`state`]: Display-state slots and their fixed fallback values
//! - [`ticker`]: Scoped repeating timers
//! - [`weather`]: The position-then-query weather pass
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It's pure orchestration logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod feed;
pub mod hud;
pub mod messages;
pub mod news;
pub mod playback;
pub mod search;
pub mod sensors;
pub mod state;
pub mod ticker;
pub mod weather;

// Re-exports for convenience
pub use engine::{Answer, AnswerEngine, AnswerRequest, Citation, GeminiEngine, DEFAULT_MODEL};
pub use error::{EngineError, SensorError};
pub use events::SurfaceEvent;
pub use feed::FeedMode;
pub use hud::Hud;
pub use messages::{HudLifecycle, HudMessage, NotifyLevel};
pub use playback::{PlaybackState, Track, PLAYLIST};
pub use search::{RequestId, RequestSeq};
pub use sensors::{DeviceSensors, GeoPoint, NullSensors, SystemSensors};
pub use state::{
    BatteryStatus, ClockReading, HeadlineSet, HudState, SearchSession, WeatherReading,
    MAX_HEADLINES, SEARCH_FAILURE_TEXT,
};
pub use ticker::Ticker;
pub use weather::WeatherOutcome;

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, parse_coords, ConfigError,
    ConfigSource, HudConfig,
};
