//! Kiosk state machine for Rotunda.
//!
//! Rotates an embedded page through the fixed set of localized documents,
//! pauses on user interaction, and resumes after an idle timeout. All work
//! happens when the host dispatches an input event or a timer comes due;
//! see [`kiosk::Kiosk`].

pub mod gate;
pub mod idle;
pub mod kiosk;
pub mod panel;
pub mod rotation;
pub mod scene;
pub mod status;
pub mod strings;

pub use rotunda_platform as platform;
pub use rotunda_types::{config, error, input, page};

pub use kiosk::{Dispatch, Kiosk};

use rotunda_platform::TimerQueue;

/// Timers armed by the kiosk components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KioskTimer {
    /// Repeating page advance.
    Advance,
    /// Repeating 1-second countdown display.
    Countdown,
    /// One-shot idle resume.
    Idle,
    /// One-shot status notification auto-hide.
    StatusHide,
}

/// Timer queue shared by all kiosk components.
pub type Timers = TimerQueue<KioskTimer>;
