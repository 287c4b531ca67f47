//! Theme and Colors
//!
//! The visor palette - phosphor cyan on near-black, the look of a
//! heads-up display bleeding through smoked glass.
//!
//! Slot accents stay within the cyan/teal family so the eye reads the
//! whole screen as one instrument; alerts break out into amber and red.

use ratatui::style::Color;

// ============================================================================
// Core HUD Palette
// ============================================================================

/// Primary readout - phosphor cyan
pub const HUD_CYAN: Color = Color::Rgb(0, 255, 214);

/// Labels and secondary text - desaturated teal
pub const HUD_TEAL_DIM: Color = Color::Rgb(72, 160, 150);

/// Pane borders at rest
pub const BORDER: Color = Color::Rgb(40, 92, 88);

/// Border of the pane that currently has input focus
pub const BORDER_ACTIVE: Color = Color::Rgb(0, 220, 190);

// ============================================================================
// Slot Accents
// ============================================================================

/// Clock digits - bright white-cyan
pub const CLOCK: Color = Color::Rgb(210, 255, 250);

/// Battery with charge to spare
pub const BATTERY_OK: Color = Color::Rgb(120, 230, 160);

/// Battery running low - alert amber
pub const BATTERY_LOW: Color = Color::Rgb(255, 170, 60);

/// Weather readout - ice blue
pub const WEATHER: Color = Color::Rgb(140, 210, 255);

/// Headline ticker text
pub const FEED: Color = Color::Rgb(0, 235, 200);

/// Citation links under a search result - muted violet
pub const CITATION: Color = Color::Rgb(170, 140, 255);

/// Playback pane accent - synth magenta
pub const PLAYBACK: Color = Color::Rgb(255, 90, 200);

/// User query text
pub const QUERY_TEXT: Color = Color::Rgb(130, 220, 130);

// ============================================================================
// Status Colors
// ============================================================================

/// Informational status text
pub const INFO: Color = Color::Rgb(150, 180, 255);

/// Warning amber
pub const WARNING: Color = Color::Rgb(255, 190, 80);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Success green
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);
