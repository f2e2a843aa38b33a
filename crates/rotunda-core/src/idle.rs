//! Idle monitor: resumes a paused rotation after a period without activity.

use rotunda_platform::{Millis, TimerId};
use rotunda_types::config::MIN_IDLE_SECS;

use crate::{KioskTimer, Timers};

/// Observable idle-tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleState {
    pub last_activity_ms: Millis,
    pub threshold_secs: u32,
    pub pending_timer: Option<TimerId>,
}

/// What to do when the idle timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleOutcome {
    /// Rotation is still paused: restart it.
    Resume,
    /// Rotation was resumed some other way; nothing to do.
    Ignore,
}

/// Owns the single one-shot idle timer.
#[derive(Debug)]
pub struct IdleMonitor {
    state: IdleState,
}

impl IdleMonitor {
    pub fn new(threshold_secs: u32, now: Millis) -> Self {
        Self {
            state: IdleState {
                last_activity_ms: now,
                threshold_secs: threshold_secs.max(MIN_IDLE_SECS),
                pending_timer: None,
            },
        }
    }

    pub fn state(&self) -> &IdleState {
        &self.state
    }

    pub fn threshold_secs(&self) -> u32 {
        self.state.threshold_secs
    }

    pub fn is_armed(&self) -> bool {
        self.state.pending_timer.is_some()
    }

    /// Record activity at `now` and cancel any pending idle callback.
    ///
    /// While rotation is stopped a fresh one-shot is armed for the full
    /// threshold; while rotating nothing is armed. Returns whether a timer
    /// was armed.
    pub fn reset(&mut self, now: Millis, rotating: bool, timers: &mut Timers) -> bool {
        self.state.last_activity_ms = now;
        self.cancel(timers);
        if rotating {
            return false;
        }
        let delay = Millis::from(self.state.threshold_secs) * 1_000;
        self.state.pending_timer = Some(timers.set_timeout(now, delay, KioskTimer::Idle));
        log::debug!(
            "Idle timer armed for {}s (at {}ms)",
            self.state.threshold_secs,
            now + delay
        );
        true
    }

    /// Handle the idle timer firing.
    pub fn on_fire(&mut self, id: TimerId, rotating: bool) -> IdleOutcome {
        if self.state.pending_timer == Some(id) {
            self.state.pending_timer = None;
        }
        if rotating {
            IdleOutcome::Ignore
        } else {
            IdleOutcome::Resume
        }
    }

    /// Apply a new threshold (clamped to the minimum) and reset.
    pub fn set_threshold(
        &mut self,
        threshold_secs: u32,
        now: Millis,
        rotating: bool,
        timers: &mut Timers,
    ) -> u32 {
        self.state.threshold_secs = threshold_secs.max(MIN_IDLE_SECS);
        self.reset(now, rotating, timers);
        self.state.threshold_secs
    }

    /// Disarm the pending idle callback, if any.
    pub fn cancel(&mut self, timers: &mut Timers) {
        if let Some(id) = self.state.pending_timer.take() {
            timers.clear(id);
        }
    }
}
