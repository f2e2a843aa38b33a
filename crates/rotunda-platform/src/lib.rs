//! Platform services for Rotunda: clocks and timer primitives.
//!
//! The kiosk core never reads the wall clock or sleeps. Hosts own a
//! [`Clock`] and feed its readings into the core, which arms and fires
//! timers through a [`TimerQueue`].

pub mod clock;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timer::{Fired, Millis, Schedule, TimerId, TimerQueue};
