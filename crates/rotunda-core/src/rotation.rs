//! Rotation controller: the "currently showing page" pointer plus the
//! repeating advance and countdown timers.

use rotunda_platform::{Millis, TimerId};
use rotunda_types::config::MIN_INTERVAL_SECS;
use rotunda_types::page::PageId;

use crate::{KioskTimer, Timers};

/// Countdown display period.
pub const COUNTDOWN_PERIOD_MS: Millis = 1_000;

/// Observable rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    /// Pages in rotation order.
    pub pages: [PageId; 3],
    /// Index into `pages` of the page on screen.
    pub current_index: usize,
    pub is_rotating: bool,
    /// Seconds until the next automatic advance, as displayed.
    pub seconds_remaining: u32,
    pub interval_secs: u32,
}

impl RotationState {
    pub fn current_page(&self) -> PageId {
        self.pages[self.current_index]
    }
}

/// Owns [`RotationState`] and the two repeating timers that drive it.
#[derive(Debug)]
pub struct RotationController {
    state: RotationState,
    advance_timer: Option<TimerId>,
    countdown_timer: Option<TimerId>,
}

impl RotationController {
    /// Create a stopped controller showing the first page.
    pub fn new(interval_secs: u32) -> Self {
        let interval_secs = interval_secs.max(MIN_INTERVAL_SECS);
        Self {
            state: RotationState {
                pages: PageId::ALL,
                current_index: 0,
                is_rotating: false,
                seconds_remaining: interval_secs,
                interval_secs,
            },
            advance_timer: None,
            countdown_timer: None,
        }
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn is_rotating(&self) -> bool {
        self.state.is_rotating
    }

    pub fn interval_secs(&self) -> u32 {
        self.state.interval_secs
    }

    /// Start rotating with a fresh countdown.
    ///
    /// The interval is clamped to at least one second. Any timers from a
    /// previous run are cleared first, so at most one advance and one
    /// countdown timer are ever armed. Returns the effective interval.
    pub fn start(&mut self, interval_secs: u32, now: Millis, timers: &mut Timers) -> u32 {
        self.clear_timers(timers);

        let interval = interval_secs.max(MIN_INTERVAL_SECS);
        self.state.interval_secs = interval;
        self.state.seconds_remaining = interval;

        // Countdown is armed first so that when both fire on the same
        // deadline the advance resets the display last.
        self.countdown_timer =
            Some(timers.set_interval(now, COUNTDOWN_PERIOD_MS, KioskTimer::Countdown));
        self.advance_timer = Some(timers.set_interval(
            now,
            Millis::from(interval) * 1_000,
            KioskTimer::Advance,
        ));
        self.state.is_rotating = true;
        log::info!("Rotation started ({interval}s interval)");
        interval
    }

    /// Stop rotating. Safe to call when already stopped.
    pub fn stop(&mut self, timers: &mut Timers) {
        self.clear_timers(timers);
        if self.state.is_rotating {
            log::info!("Rotation stopped");
        }
        self.state.is_rotating = false;
    }

    /// Stop if rotating, otherwise start with the current interval.
    pub fn toggle(&mut self, now: Millis, timers: &mut Timers) {
        if self.state.is_rotating {
            self.stop(timers);
        } else {
            self.start(self.state.interval_secs, now, timers);
        }
    }

    /// Apply a new interval. A running rotation restarts with a fresh
    /// countdown; a stopped one just remembers the value.
    pub fn set_interval(&mut self, interval_secs: u32, now: Millis, timers: &mut Timers) {
        if self.state.is_rotating {
            self.stop(timers);
            self.start(interval_secs, now, timers);
        } else {
            self.state.interval_secs = interval_secs.max(MIN_INTERVAL_SECS);
        }
    }

    /// Handle an advance firing: move to the next page circularly and
    /// reset the countdown. Returns the new page.
    pub fn advance(&mut self) -> PageId {
        self.state.current_index = (self.state.current_index + 1) % self.state.pages.len();
        self.state.seconds_remaining = self.state.interval_secs;
        self.state.current_page()
    }

    /// Handle a countdown firing. Wraps back to the interval instead of
    /// going below zero.
    pub fn countdown(&mut self) -> u32 {
        self.state.seconds_remaining = self
            .state
            .seconds_remaining
            .checked_sub(1)
            .unwrap_or(self.state.interval_secs);
        self.state.seconds_remaining
    }

    /// Point at `page` without touching the timers.
    pub fn select(&mut self, page: PageId) {
        if let Some(i) = self.state.pages.iter().position(|p| *p == page) {
            self.state.current_index = i;
        }
    }

    /// Whether `id` is one of this controller's armed timers.
    pub fn owns(&self, id: TimerId) -> bool {
        self.advance_timer == Some(id) || self.countdown_timer == Some(id)
    }

    fn clear_timers(&mut self, timers: &mut Timers) {
        if let Some(id) = self.advance_timer.take() {
            timers.clear(id);
        }
        if let Some(id) = self.countdown_timer.take() {
            timers.clear(id);
        }
    }
}
