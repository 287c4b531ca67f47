//! Display-state slots
//!
//! The HUD renders from a small set of independently owned state slots. Each
//! slot has exactly one writer inside the orchestrator (the clock ticker
//! writes the clock, the weather resolver writes the weather, and so on);
//! everything else reads. Slots are replaced wholesale, never merged, which
//! keeps racing resolutions safe: the last complete value wins.
//!
//! Failure values live here as ordinary constructors. A slot holding
//! `WeatherReading::offline()` renders exactly like one holding live data,
//! which is what keeps the HUD free of alert popups.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::engine::Citation;
use crate::playback::PlaybackState;

// ============================================================================
// Clock
// ============================================================================

/// An instantaneous wall-clock snapshot
///
/// Replaced wholesale on every tick. No history is retained; a missed tick
/// is simply absorbed because the next one reads "now" directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockReading {
    /// Local timestamp at the moment of the tick
    pub timestamp: DateTime<Local>,
}

impl ClockReading {
    /// Snapshot the current wall-clock time
    #[must_use]
    pub fn now() -> Self {
        Self {
            timestamp: Local::now(),
        }
    }

    /// Build a reading from a known timestamp
    #[must_use]
    pub fn at(timestamp: DateTime<Local>) -> Self {
        Self { timestamp }
    }

    /// Time line for display, e.g. `14:03:59`
    #[must_use]
    pub fn time_line(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Date line for display, e.g. `MON 2026.08.24`
    #[must_use]
    pub fn date_line(&self) -> String {
        self.timestamp.format("%a %Y.%m.%d").to_string().to_uppercase()
    }
}

impl Default for ClockReading {
    fn default() -> Self {
        Self::now()
    }
}

// ============================================================================
// Battery
// ============================================================================

/// Battery level and charging state
///
/// Starts at an optimistic full-and-charging default so a machine without a
/// readable battery (desktop, container) renders sensibly forever. Only the
/// sensor bridge writes this slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryStatus {
    /// Charge percentage, 0-100
    pub level: u8,
    /// Whether the device is on external power
    pub charging: bool,
}

impl BatteryStatus {
    /// Build a status, clamping the level into 0-100
    #[must_use]
    pub fn new(level: u8, charging: bool) -> Self {
        Self {
            level: level.min(100),
            charging,
        }
    }

    /// Whether the charge is low enough to warrant an accent color
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.level <= 20 && !self.charging
    }
}

impl Default for BatteryStatus {
    fn default() -> Self {
        Self {
            level: 100,
            charging: true,
        }
    }
}

// ============================================================================
// Weather
// ============================================================================

/// A weather reading, all fields textual
///
/// The answer engine returns free text, so nothing here is numeric. The slot
/// moves through four shapes: scanning (initial), resolved (parsed engine
/// output), degraded (engine answered off-shape; temperature survives from
/// the prior value), and error (no position fix, or the engine failed).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature text, e.g. `15°C`
    pub temperature: String,
    /// Condition text, e.g. `Rainy`
    pub condition: String,
    /// Location text, e.g. `Tokyo`
    pub location: String,
}

impl WeatherReading {
    /// Initial state before the first resolution attempt completes
    #[must_use]
    pub fn scanning() -> Self {
        Self {
            temperature: "--".to_string(),
            condition: "SCANNING".to_string(),
            location: "LOCATING".to_string(),
        }
    }

    /// No position fix: geolocation denied or unavailable
    #[must_use]
    pub fn no_signal() -> Self {
        Self {
            temperature: "--".to_string(),
            condition: "NO SIGNAL".to_string(),
            location: "GPS ERROR".to_string(),
        }
    }

    /// The engine call failed outright
    #[must_use]
    pub fn offline() -> Self {
        Self {
            temperature: "ERR".to_string(),
            condition: "OFFLINE".to_string(),
            location: "UNKNOWN".to_string(),
        }
    }

    /// The engine answered but not in the expected shape
    ///
    /// Partial data beats none: the temperature carries over from whatever
    /// the slot held before this attempt.
    #[must_use]
    pub fn degraded(prior_temperature: impl Into<String>) -> Self {
        Self {
            temperature: prior_temperature.into(),
            condition: "DATA RECEIVED".to_string(),
            location: "LOCAL".to_string(),
        }
    }

    /// A fully parsed reading
    #[must_use]
    pub fn resolved(
        location: impl Into<String>,
        temperature: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            condition: condition.into(),
            location: location.into(),
        }
    }
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self::scanning()
    }
}

// ============================================================================
// Headlines
// ============================================================================

/// Maximum headlines kept, regardless of how many the engine returns
pub const MAX_HEADLINES: usize = 3;

/// The ordered headline list for the feed pane
///
/// Empty means "not yet loaded" and renders as a placeholder. The fallback
/// installed on load failure is ordinary data, not an error state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineSet {
    lines: Vec<String>,
}

impl HeadlineSet {
    /// The not-yet-loaded state
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-clean lines, clamping to [`MAX_HEADLINES`]
    ///
    /// The clamp is defensive: the engine is asked for exactly three but is
    /// not trusted to honor the count.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(Into::into)
                .take(MAX_HEADLINES)
                .collect(),
        }
    }

    /// The fixed sequence installed when the startup load fails
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_lines([
            "NETWORK ERROR: UNABLE TO SYNC WITH WORLD DATA.",
            "LOCAL CACHE LOADED.",
            "SYSTEM DIAGNOSTICS RECOMMENDED.",
        ])
    }

    /// Whether headlines have loaded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of headlines held
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The headline lines in order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

// ============================================================================
// Search
// ============================================================================

/// Result text substituted when a search request fails
pub const SEARCH_FAILURE_TEXT: &str = "CONNECTION INTERRUPTED. TARGET NOT FOUND.";

/// The single live search session
///
/// `result_text == None` with `pending == false` is the idle sentinel that
/// sends the feed pane back to headlines. Submitting a new query replaces
/// the whole session; there is no queue and no history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSession {
    /// The query text as submitted (already trimmed)
    pub query: String,
    /// Generated answer text once the request settles
    pub result_text: Option<String>,
    /// Cited sources, already filtered to entries with a usable link
    pub citations: Vec<Citation>,
    /// Whether a request is still in flight
    pub pending: bool,
}

impl SearchSession {
    /// The no-active-search state
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Start a fresh session for a submitted query
    ///
    /// Any previous result or in-flight state is discarded wholesale.
    #[must_use]
    pub fn begin(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            result_text: None,
            citations: Vec::new(),
            pending: true,
        }
    }

    /// Settle the session with a successful answer
    pub fn resolve(&mut self, text: impl Into<String>, citations: Vec<Citation>) {
        self.result_text = Some(text.into());
        self.citations = citations;
        self.pending = false;
    }

    /// Settle the session with the fixed failure text
    pub fn fail(&mut self) {
        self.result_text = Some(SEARCH_FAILURE_TEXT.to_string());
        self.citations.clear();
        self.pending = false;
    }

    /// Whether no search is active at all
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.pending && self.result_text.is_none()
    }

    /// Whether a request is in flight
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether a settled result is available
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.pending && self.result_text.is_some()
    }
}

// ============================================================================
// Container
// ============================================================================

/// Every display slot the HUD renders from
///
/// Owned by the orchestrator task. Single writer per slot; surfaces receive
/// copies through messages and never write back.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HudState {
    /// Wall clock, replaced every tick
    pub clock: ClockReading,
    /// Battery level and charging state
    pub battery: BatteryStatus,
    /// Geolocated weather
    pub weather: WeatherReading,
    /// Generated headlines for the feed pane
    pub headlines: HeadlineSet,
    /// The live search session
    pub search: SearchSession,
    /// Simulated media playback
    pub playback: PlaybackState,
}

impl HudState {
    /// Fresh state with every slot at its initial value
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
