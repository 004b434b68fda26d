//! Redraw scheduler: periodic ticks on a dedicated thread.
//!
//! The clock is a pure observer for the display layer — it never touches
//! the board or the snakes. Ticks are delivered through a
//! `crossbeam_channel::tick` receiver so the thread wakes exactly once
//! per period and observes stop within one interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Invokes a callback at a fixed rate until stopped.
///
/// While paused the thread keeps ticking but suppresses the callback, so
/// resume takes effect on the very next tick.
pub struct RaceClock {
    paused: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl RaceClock {
    /// Start a clock firing `on_tick` at `rate_hz` (must be positive;
    /// non-positive rates are clamped to 1 Hz).
    pub fn start<F>(rate_hz: f64, on_tick: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let period = Duration::from_secs_f64(1.0 / rate_hz.max(1.0));
        let paused = Arc::new(AtomicBool::new(false));
        let stop = Arc::new(AtomicBool::new(false));

        let thread_paused = Arc::clone(&paused);
        let thread_stop = Arc::clone(&stop);
        let thread = thread::Builder::new()
            .name("slither-clock".into())
            .spawn(move || {
                let ticker = crossbeam_channel::tick(period);
                while ticker.recv().is_ok() {
                    if thread_stop.load(Ordering::Acquire) {
                        break;
                    }
                    if !thread_paused.load(Ordering::Acquire) {
                        on_tick();
                    }
                }
            })
            .expect("failed to spawn clock thread");

        Self {
            paused,
            stop,
            thread: Some(thread),
        }
    }

    /// Suppress ticks until [`RaceClock::resume`].
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Deliver ticks again, starting with the next one.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
    }

    /// Stop the clock and join its thread. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RaceClock {
    fn drop(&mut self) {
        self.stop();
    }
}
