//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize)
//! - HudClient for orchestration
//! - DisplayState for rendering
//!
//! # Architecture
//!
//! The App is a thin client that:
//! 1. Converts terminal events to SurfaceEvents
//! 2. Sends events to the embedded core via HudClient
//! 3. Receives HudMessages and updates DisplayState
//! 4. Renders based on DisplayState

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use visor_core::{HudMessage, NotifyLevel};

use crate::client::HudClient;
use crate::display::DisplayState;
use crate::panes;

/// Quick sign-off lines (no engine round trip, instant)
const SIGN_OFFS: &[&str] = &[
    "Visor down.",
    "Going dark.",
    "Feed closed.",
    "Eyes front.",
    "Overlay dismissed.",
    "Back to meatspace.",
    "Stay sharp.",
    "Transmission ends.",
    "See you on the grid.",
    "Uplink severed.",
    "Glass off.",
    "Signal parked.",
];

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Sign-off line to print after the terminal is restored
    sign_off: Option<String>,

    // === Core Integration ===
    /// Client for communicating with the embedded HUD core
    client: HudClient,
    /// Display state derived from HudMessages
    display: DisplayState,

    // === Input State ===
    /// Query input buffer
    input_buffer: String,

    // === Misc State ===
    /// Last frame time (for display timers)
    last_frame: Instant,
    /// Developer mode
    dev_mode: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> anyhow::Result<Self> {
        let mut client = HudClient::new();
        let mut display = DisplayState::new();

        // A broken config file shows up on the status line, not as a crash.
        if let Some(warning) = client.take_config_warning() {
            display.apply_message(HudMessage::Notify {
                level: NotifyLevel::Warning,
                message: warning,
            });
        }

        Ok(Self {
            running: true,
            sign_off: None,
            client,
            display,
            input_buffer: String::new(),
            last_frame: Instant::now(),
            dev_mode: false,
        })
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // ~10 FPS is plenty for one-second slot updates
        let frame_duration = Duration::from_millis(100);

        // Async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        // Track startup so the UI stays responsive while sources launch
        enum StartupPhase {
            NeedStart,
            Done,
        }
        let mut startup_phase = StartupPhase::NeedStart;

        // Render the boot placeholders immediately
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        // Only handle Press events (not Release or Repeat);
                        // resizes fall through, the next draw re-measures.
                        if let Event::Key(key) = event {
                            if key.kind == KeyEventKind::Press {
                                self.handle_key(key).await;
                            }
                        }
                    }
                }

                // Frame tick - do work and render
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if let StartupPhase::NeedStart = startup_phase {
                        // Short timeout so a slow first frame cannot freeze
                        // input; start() itself never awaits the network.
                        match tokio::time::timeout(
                            Duration::from_millis(50),
                            self.client.start()
                        ).await {
                            Ok(Ok(())) => startup_phase = StartupPhase::Done,
                            Ok(Err(e)) => {
                                tracing::warn!("HUD core start error: {}", e);
                                startup_phase = StartupPhase::Done;
                            }
                            Err(_) => {
                                // Timeout - will retry next frame
                            }
                        }
                    }
                }
            }

            // Commit settled source results
            self.client.poll().await;

            // Receive and process messages from the core
            self.process_messages();

            // Advance surface-local timers
            self.update();

            // Render
            self.render(terminal)?;

            // Check for quit
            if self.display.is_shutting_down() {
                self.running = false;
            }

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        Ok(())
    }

    /// Process all pending messages from the core
    fn process_messages(&mut self) {
        for msg in self.client.recv_all() {
            // The core's sign-off only fills the gap when no local line was
            // picked, so a keyboard quit keeps its flavor.
            if let HudMessage::Quit {
                message: Some(line),
            } = &msg
            {
                self.sign_off.get_or_insert_with(|| line.clone());
            }

            self.display.apply_message(msg);
        }
    }

    /// Handle keyboard input
    async fn handle_key(&mut self, key: event::KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.pick_sign_off();
                let _ = self.client.request_quit().await;
                self.running = false;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.pick_sign_off();
                let _ = self.client.request_quit().await;
                self.running = false;
            }

            // Playback transport
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let _ = self.client.toggle_playback().await;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let _ = self.client.skip_track().await;
            }

            // Weather rescan
            KeyCode::Tab => {
                let _ = self.client.rescan_weather().await;
            }

            // Submit query
            KeyCode::Enter => {
                if !self.input_buffer.is_empty() {
                    let query = std::mem::take(&mut self.input_buffer);
                    let _ = self.client.submit_query(query).await;
                }
            }

            // Dismiss: drop typed input and return the feed to headlines
            KeyCode::Esc => {
                self.input_buffer.clear();
                let _ = self.client.clear_feed().await;
            }

            // Typing
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }

            KeyCode::Backspace => {
                self.input_buffer.pop();
            }

            // Toggle dev mode
            KeyCode::F(12) => {
                self.dev_mode = !self.dev_mode;
            }

            _ => {}
        }
    }

    /// Advance display timers by one frame
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;

        self.display.update(delta);
    }

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            panes::render(frame, &self.display, &self.input_buffer, self.dev_mode);
        })?;
        Ok(())
    }

    /// Pick a quick local sign-off line
    fn pick_sign_off(&mut self) {
        let idx = rand::random::<usize>() % SIGN_OFFS.len();
        self.sign_off = Some(SIGN_OFFS[idx].to_string());
    }

    /// The sign-off line to print after the TUI closes
    pub fn sign_off(&self) -> Option<&str> {
        self.sign_off.as_deref()
    }
}
