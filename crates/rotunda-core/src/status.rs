//! Transient status notifications with auto-hide.

use rotunda_platform::{Millis, TimerId};

use crate::{KioskTimer, Timers};

/// Default display time for a notification.
pub const DEFAULT_STATUS_DURATION_MS: Millis = 3_000;

/// Holds the notification on screen and its pending auto-hide.
#[derive(Debug)]
pub struct StatusNotifier {
    message: Option<String>,
    hide_timer: Option<TimerId>,
    default_duration_ms: Millis,
}

impl StatusNotifier {
    pub fn new(default_duration_ms: Millis) -> Self {
        Self {
            message: None,
            hide_timer: None,
            default_duration_ms,
        }
    }

    /// Currently displayed message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Display `message`, replacing any current one and its pending hide.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        duration_ms: Option<Millis>,
        now: Millis,
        timers: &mut Timers,
    ) {
        if let Some(id) = self.hide_timer.take() {
            timers.clear(id);
        }
        let duration = duration_ms.unwrap_or(self.default_duration_ms);
        let message = message.into();
        log::info!("Status: {message}");
        self.message = Some(message);
        self.hide_timer = Some(timers.set_timeout(now, duration, KioskTimer::StatusHide));
    }

    /// Handle an auto-hide firing. Returns `true` if the message was hidden.
    pub fn on_hide(&mut self, id: TimerId) -> bool {
        if self.hide_timer != Some(id) {
            return false;
        }
        self.hide_timer = None;
        self.message = None;
        true
    }
}

impl Default for StatusNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_DURATION_MS)
    }
}
