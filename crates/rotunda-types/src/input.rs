//! Platform-agnostic input events.
//!
//! Every host (terminal console, browser shim, test harness) maps its native
//! input to these enums. The kiosk core never sees raw platform input.

use serde::{Deserialize, Serialize};

use crate::error::{KioskError, Result};
use crate::page::PageId;

/// A platform-agnostic input event observed anywhere in the kiosk document.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to absolute position.
    PointerMove { x: i32, y: i32 },
    /// A key was pressed.
    KeyPress(char),
    /// The document was scrolled.
    Scroll { dy: i32 },
    /// Pointer click at absolute position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// An action triggered through the control panel.
    Panel(PanelAction),
    /// A message posted by the embedded page across the frame boundary.
    Embedded(EmbeddedMessage),
    /// Host requested shutdown.
    Quit,
}

impl InputEvent {
    /// Whether this event counts as user activity for idle detection.
    pub fn is_activity(&self) -> bool {
        match self {
            Self::PointerMove { .. }
            | Self::KeyPress(_)
            | Self::Scroll { .. }
            | Self::PointerClick { .. }
            | Self::Panel(_) => true,
            Self::Embedded(_) | Self::Quit => false,
        }
    }
}

/// Actions bound to control panel widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Pause / resume button.
    ToggleRotation,
    /// Manual page selection button.
    SelectPage(PageId),
    /// Interval input changed (seconds).
    SetInterval(u32),
    /// Idle threshold input changed (seconds).
    SetIdleThreshold(u32),
    /// Content interaction checkbox changed.
    SetContentInteraction(bool),
    /// Show / hide the control panel.
    ToggleVisibility,
}

/// Typed message from the embedded page to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmbeddedMessage {
    /// A click happened inside the embedded content.
    Clicked,
}

impl EmbeddedMessage {
    /// Bare string posted by legacy kiosk pages.
    pub const CLICK_SENTINEL: &'static str = "iframeClicked";

    /// Decode a raw cross-boundary payload.
    ///
    /// Accepts the bare click sentinel or the tagged JSON form
    /// `{"type":"clicked"}`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw == Self::CLICK_SENTINEL {
            return Ok(Self::Clicked);
        }
        if raw.starts_with('{') {
            return Ok(serde_json::from_str(raw)?);
        }
        Err(KioskError::Message(format!("unrecognized payload '{raw}'")))
    }
}
