//! Visor TUI - Terminal surface for the visor HUD core
//!
//! This crate renders a single-screen heads-up display: clock, power,
//! weather, a shared data feed, and simulated playback, with a free-text
//! query bar at the bottom.
//!
//! # Architecture
//!
//! - **Client**: the embedded core behind a thin event/message interface
//! - **Display**: render model mirrored from core messages
//! - **Panes**: pure render functions, one per HUD region
//! - **Theme**: the phosphor-cyan palette

pub mod app;
pub mod client;
pub mod display;
pub mod panes;
pub mod theme;

pub use app::App;
