//! Scoped Repeating Timers
//!
//! A [`Ticker`] owns a background task that sends one pulse per period into
//! an mpsc channel. The task is tied to the ticker's lifetime: dropping the
//! ticker aborts the task, so a timer can never outlive the feature that
//! created it. Pausing playback drops its ticker, shutdown drops both.
//!
//! Missed ticks are skipped rather than buffered. If the process stalls, the
//! clock jumps forward instead of replaying a burst of stale seconds.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// A repeating timer scoped to its owner
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a timer that sends `pulse()` into `tx` once per `period`
    ///
    /// The first pulse fires one full period after the call, not
    /// immediately. The task exits on its own when the receiving side of
    /// `tx` is dropped.
    pub fn spawn<T, F>(period: Duration, tx: mpsc::Sender<T>, pulse: F) -> Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(pulse()).await.is_err() {
                    return;
                }
            }
        });
        Self { handle }
    }

    /// Whether the background task has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
