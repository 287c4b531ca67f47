//! HUD Orchestration
//!
//! The central coordinator that owns every display slot and every live
//! timer. It receives events from surfaces, runs data sources in spawned
//! tasks, and sends display messages back out.
//!
//! # Design Philosophy
//!
//! The HUD core is the "brain"; surfaces are interchangeable renderers.
//! All state mutation happens on the task that drives [`Hud::handle_event`]
//! and [`Hud::poll`]. Source tasks (weather pass, headline load, search
//! requests, battery watch, tickers) never touch state directly; they report
//! through an internal channel and the orchestrator commits the results one
//! at a time. That single-writer discipline is what makes the stale-search
//! check and the degraded-weather commit race-free without locks.
//!
//! Timers are scoped values, not fire-and-forget tasks. Pausing playback
//! drops its ticker; shutdown drops everything. A dropped ticker can never
//! pulse again.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::HudConfig;
use crate::engine::{Answer, AnswerEngine, AnswerRequest, Citation};
use crate::error::EngineError;
use crate::events::SurfaceEvent;
use crate::messages::{HudLifecycle, HudMessage, NotifyLevel};
use crate::news;
use crate::search::{RequestId, RequestSeq};
use crate::sensors::DeviceSensors;
use crate::state::{BatteryStatus, ClockReading, HeadlineSet, HudState, SearchSession};
use crate::ticker::Ticker;
use crate::weather::{self, WeatherOutcome};

/// Capacity of the internal source-update channel
const UPDATE_CHANNEL_SIZE: usize = 64;

/// Wall-clock tick period
const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Playback progress tick period
const PLAYBACK_TICK: Duration = Duration::from_secs(1);

/// Reports from source tasks back to the orchestrator
///
/// Everything a background task learns comes home through one of these.
/// Commits happen in arrival order on the orchestrator task.
#[derive(Debug)]
enum SourceUpdate {
    /// The startup health probe settled
    Health { healthy: bool },
    /// One second of wall-clock time elapsed
    ClockTick,
    /// The battery sensor reported a change
    Battery(BatteryStatus),
    /// A weather pass settled
    Weather(WeatherOutcome),
    /// The startup headline load settled
    Headlines(HeadlineSet),
    /// A search request settled
    Search {
        id: RequestId,
        outcome: Result<Answer, EngineError>,
    },
    /// One second of simulated playback elapsed
    PlaybackTick,
}

/// The HUD orchestrator
///
/// Generic over the answer engine and the device sensors so tests can
/// substitute deterministic mocks for both.
pub struct Hud<E: AnswerEngine + 'static, S: DeviceSensors + 'static> {
    engine: Arc<E>,
    sensors: Arc<S>,
    config: HudConfig,
    state: HudState,
    seq: RequestSeq,
    clock_ticker: Option<Ticker>,
    playback_ticker: Option<Ticker>,
    battery_task: Option<JoinHandle<()>>,
    updates_tx: mpsc::Sender<SourceUpdate>,
    updates_rx: mpsc::Receiver<SourceUpdate>,
    tx: mpsc::Sender<HudMessage>,
}

impl<E: AnswerEngine + 'static, S: DeviceSensors + 'static> Hud<E, S> {
    /// Create a new HUD with the given engine, sensors, and config
    pub fn new(engine: E, sensors: S, config: HudConfig, tx: mpsc::Sender<HudMessage>) -> Self {
        let (updates_tx, updates_rx) = mpsc::channel(UPDATE_CHANNEL_SIZE);
        Self {
            engine: Arc::new(engine),
            sensors: Arc::new(sensors),
            config,
            state: HudState::new(),
            seq: RequestSeq::new(),
            clock_ticker: None,
            playback_ticker: None,
            battery_task: None,
            updates_tx,
            updates_rx,
            tx,
        }
    }

    /// The current display state
    #[must_use]
    pub fn state(&self) -> &HudState {
        &self.state
    }

    /// Start every data source
    ///
    /// Seeds the clock slot immediately so the first render has a real
    /// timestamp, then spawns the tickers, the battery watch, the health
    /// probe, and the two one-shot startup loads. Returns once everything
    /// is launched without awaiting any network I/O; the probes and loads
    /// settle later through [`Hud::poll`].
    pub async fn start(&mut self) -> Result<()> {
        tracing::info!(
            "HUD core starting (engine: {}, model: {})",
            self.engine.name(),
            self.config.model
        );
        self.set_lifecycle(HudLifecycle::Initializing).await;
        self.spawn_health_probe();

        self.state.clock = ClockReading::now();
        self.send(HudMessage::ClockUpdated {
            reading: self.state.clock.clone(),
        })
        .await;

        self.clock_ticker = Some(Ticker::spawn(CLOCK_TICK, self.updates_tx.clone(), || {
            SourceUpdate::ClockTick
        }));
        if self.state.playback.playing {
            self.start_playback_ticker();
        }
        self.start_battery_watch();
        self.spawn_weather_pass();
        self.spawn_headline_load();

        self.set_lifecycle(HudLifecycle::Online).await;
        Ok(())
    }

    /// Handle an event from a surface
    pub async fn handle_event(&mut self, event: SurfaceEvent) -> Result<()> {
        tracing::debug!("Surface event: {}", event.name());

        match event {
            SurfaceEvent::QuerySubmitted { query } => {
                self.submit_query(query).await;
            }

            SurfaceEvent::FeedCleared => {
                // Clearing also supersedes any in-flight request, so a late
                // response cannot resurrect a dismissed session.
                let _ = self.seq.issue();
                self.state.search = SearchSession::idle();
                self.send_search().await;
            }

            SurfaceEvent::WeatherRescanRequested => {
                // The slot keeps its current reading until the new pass
                // settles; a degraded answer still inherits the old
                // temperature that way.
                self.spawn_weather_pass();
            }

            SurfaceEvent::PlaybackToggled => {
                let playing = self.state.playback.toggle();
                if playing {
                    self.start_playback_ticker();
                } else {
                    self.playback_ticker = None;
                }
                self.send_playback().await;
            }

            SurfaceEvent::TrackSkipped => {
                self.state.playback.skip();
                if self.playback_ticker.is_none() {
                    self.start_playback_ticker();
                }
                self.send_playback().await;
            }

            SurfaceEvent::QuitRequested => {
                self.shutdown().await;
            }
        }

        Ok(())
    }

    /// Drain and commit all pending source updates
    ///
    /// Call this regularly from the surface's event loop. Non-blocking.
    pub async fn poll(&mut self) {
        // Collect first to avoid borrow issues while committing.
        let mut updates = Vec::new();
        while let Ok(update) = self.updates_rx.try_recv() {
            updates.push(update);
        }
        for update in updates {
            self.commit(update).await;
        }
    }

    /// Stop every source and tell surfaces to quit
    pub async fn shutdown(&mut self) {
        tracing::info!("HUD core shutting down");
        self.set_lifecycle(HudLifecycle::ShuttingDown).await;

        // Dropping a ticker aborts its task.
        self.clock_ticker = None;
        self.playback_ticker = None;
        if let Some(task) = self.battery_task.take() {
            task.abort();
        }

        // Source results still queued internally must never commit after
        // this point; close the channel and throw away whatever is buffered.
        self.updates_rx.close();
        while self.updates_rx.try_recv().is_ok() {}

        self.send(HudMessage::Quit {
            message: Some("Link terminated.".to_string()),
        })
        .await;
    }

    // ============================================
    // Event handling
    // ============================================

    async fn submit_query(&mut self, query: String) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }

        let id = self.seq.issue();
        self.state.search = SearchSession::begin(&query);
        self.send_search().await;

        let engine = Arc::clone(&self.engine);
        let updates_tx = self.updates_tx.clone();
        tokio::spawn(async move {
            let request = AnswerRequest::new(query).with_grounding(true);
            let outcome = engine.ask(&request).await;
            let _ = updates_tx.send(SourceUpdate::Search { id, outcome }).await;
        });
    }

    // ============================================
    // Source tasks
    // ============================================

    fn start_playback_ticker(&mut self) {
        self.playback_ticker = Some(Ticker::spawn(
            PLAYBACK_TICK,
            self.updates_tx.clone(),
            || SourceUpdate::PlaybackTick,
        ));
    }

    fn spawn_health_probe(&self) {
        let engine = Arc::clone(&self.engine);
        let updates_tx = self.updates_tx.clone();
        tokio::spawn(async move {
            let healthy = engine.health_check().await;
            let _ = updates_tx.send(SourceUpdate::Health { healthy }).await;
        });
    }

    fn start_battery_watch(&mut self) {
        if let Some(task) = self.battery_task.take() {
            task.abort();
        }
        let Some(mut battery_rx) = self.sensors.observe_battery() else {
            tracing::debug!("No battery capability, keeping optimistic default");
            return;
        };
        let updates_tx = self.updates_tx.clone();
        self.battery_task = Some(tokio::spawn(async move {
            while let Some(status) = battery_rx.recv().await {
                if updates_tx.send(SourceUpdate::Battery(status)).await.is_err() {
                    return;
                }
            }
        }));
    }

    fn spawn_weather_pass(&self) {
        let engine = Arc::clone(&self.engine);
        let sensors = Arc::clone(&self.sensors);
        let updates_tx = self.updates_tx.clone();
        tokio::spawn(async move {
            let outcome = weather::resolve(engine.as_ref(), sensors.as_ref()).await;
            let _ = updates_tx.send(SourceUpdate::Weather(outcome)).await;
        });
    }

    fn spawn_headline_load(&self) {
        let engine = Arc::clone(&self.engine);
        let updates_tx = self.updates_tx.clone();
        tokio::spawn(async move {
            let headlines = news::load(engine.as_ref()).await;
            let _ = updates_tx.send(SourceUpdate::Headlines(headlines)).await;
        });
    }

    // ============================================
    // Commits
    // ============================================

    async fn commit(&mut self, update: SourceUpdate) {
        match update {
            SourceUpdate::Health { healthy } => {
                if healthy {
                    tracing::debug!("Answer engine reachable");
                } else {
                    self.notify(
                        NotifyLevel::Warning,
                        "Answer engine unreachable - live data will fall back",
                    )
                    .await;
                }
            }

            SourceUpdate::ClockTick => {
                self.state.clock = ClockReading::now();
                self.send(HudMessage::ClockUpdated {
                    reading: self.state.clock.clone(),
                })
                .await;
            }

            SourceUpdate::Battery(status) => {
                self.state.battery = status;
                self.send(HudMessage::BatteryUpdated { status }).await;
            }

            SourceUpdate::Weather(outcome) => {
                self.state.weather = outcome.commit(&self.state.weather);
                self.send(HudMessage::WeatherUpdated {
                    reading: self.state.weather.clone(),
                })
                .await;
            }

            SourceUpdate::Headlines(headlines) => {
                self.state.headlines = headlines.clone();
                self.send(HudMessage::HeadlinesUpdated { headlines }).await;
            }

            SourceUpdate::Search { id, outcome } => {
                self.commit_search(id, outcome).await;
            }

            SourceUpdate::PlaybackTick => {
                // A pulse may already be queued when pause lands; honor the
                // transport state at commit time, not at pulse time.
                if self.state.playback.playing {
                    self.state.playback.tick();
                    self.send_playback().await;
                }
            }
        }
    }

    async fn commit_search(&mut self, id: RequestId, outcome: Result<Answer, EngineError>) {
        if !self.seq.is_current(id) {
            tracing::debug!("Discarding stale search response");
            return;
        }

        match outcome {
            Ok(mut answer) => {
                answer.citations.retain(Citation::has_resolvable_uri);
                self.state.search.resolve(answer.text, answer.citations);
            }
            Err(err) => {
                tracing::warn!("Search failed: {err}");
                self.state.search.fail();
            }
        }
        self.send_search().await;
    }

    // ============================================
    // Helpers
    // ============================================

    async fn set_lifecycle(&mut self, state: HudLifecycle) {
        tracing::debug!("Lifecycle: {}", state.description());
        self.send(HudMessage::Lifecycle { state }).await;
    }

    async fn notify(&self, level: NotifyLevel, message: &str) {
        self.send(HudMessage::Notify {
            level,
            message: message.to_string(),
        })
        .await;
    }

    async fn send_search(&self) {
        self.send(HudMessage::SearchUpdated {
            session: self.state.search.clone(),
        })
        .await;
    }

    async fn send_playback(&self) {
        self.send(HudMessage::PlaybackUpdated {
            playback: self.state.playback,
        })
        .await;
    }

    async fn send(&self, msg: HudMessage) {
        if let Err(err) = self.tx.send(msg).await {
            tracing::warn!("Failed to send message to surface: {err}");
        }
    }
}
