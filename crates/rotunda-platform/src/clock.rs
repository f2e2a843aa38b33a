//! Monotonic millisecond clocks.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::timer::Millis;

/// Abstraction over a monotonic time source.
pub trait Clock {
    /// Milliseconds since the clock's epoch.
    fn now_ms(&self) -> Millis;
}

/// Clock backed by [`std::time::Instant`], with its epoch at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        duration_ms(self.start.elapsed())
    }
}

/// Whole milliseconds in `d`, saturating at `Millis::MAX`.
fn duration_ms(d: Duration) -> Millis {
    Millis::try_from(d.as_millis()).unwrap_or(Millis::MAX)
}

/// Clock that only moves when told to. Used for simulation and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `ms`.
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute instant. Earlier instants are ignored.
    pub fn set(&self, at: Millis) {
        if at > self.now.get() {
            self.now.set(at);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}
