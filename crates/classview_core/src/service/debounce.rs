//! Trailing-edge debouncer for rapid input.
//!
//! # Invariants
//! - Only the latest submitted value is kept; earlier ones are discarded.
//! - A value is released once per burst, after `window` of quiet time.
//! - Time is injected by the caller; no timers or threads are spawned.

use std::time::{Duration, Instant};

/// Collapses bursts of submissions into one trailing value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replaces any pending value and restarts the quiet window.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Returns whether a value is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant when the pending value becomes ready, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|(_, submitted_at)| *submitted_at + self.window)
    }

    /// Releases the pending value when its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Releases the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}
