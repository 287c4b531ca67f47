//! Simulated media playback
//!
//! Purely decorative: a progress counter that advances once per second while
//! "playing" and wraps at 100. The playlist is static reference data baked
//! into the binary; nothing here touches audio hardware. The orchestrator
//! owns the 1-second tick and cancels it whenever playback pauses, so a
//! paused HUD holds zero live playback timers.

use serde::{Deserialize, Serialize};

/// One playlist entry, display strings only
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    /// Track title
    pub title: &'static str,
    /// Artist name
    pub artist: &'static str,
    /// Duration label, informational only
    pub duration: &'static str,
}

/// The built-in playlist
///
/// Read-only reference data. Never mutated at runtime.
pub const PLAYLIST: &[Track] = &[
    Track {
        title: "Midnight Grid",
        artist: "Vector Haze",
        duration: "3:42",
    },
    Track {
        title: "Chrome Rain",
        artist: "Null Pointer",
        duration: "4:15",
    },
    Track {
        title: "Substrate Drift",
        artist: "Ion Veil",
        duration: "2:58",
    },
    Track {
        title: "Afterimage",
        artist: "Vector Haze",
        duration: "5:03",
    },
];

/// Playback position and transport state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Index into [`PLAYLIST`]
    pub track_index: usize,
    /// Whether the progress tick is running
    pub playing: bool,
    /// Synthetic progress, always in 0-99
    pub progress: u8,
}

impl PlaybackState {
    /// Advance one second of simulated playback
    ///
    /// Wraps modulo 100. Only an explicit track change resets it.
    pub fn tick(&mut self) {
        self.progress = (self.progress + 1) % 100;
    }

    /// Flip play/pause, returning the new playing state
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Advance to the next track
    ///
    /// Resets progress and forces playback on: skipping is an explicit
    /// intent to listen.
    pub fn skip(&mut self) {
        self.track_index = (self.track_index + 1) % PLAYLIST.len();
        self.progress = 0;
        self.playing = true;
    }

    /// The track currently loaded
    #[must_use]
    pub fn current_track(&self) -> &'static Track {
        &PLAYLIST[self.track_index % PLAYLIST.len()]
    }

    /// Progress as a 0.0-1.0 ratio for gauge rendering
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.progress) / 100.0
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            track_index: 0,
            playing: true,
            progress: 0,
        }
    }
}
