//! Interaction gate: decides what a click on the kiosk means.
//!
//! With content interaction disabled a full-viewport overlay sits above the
//! embedded page and swallows every click outside the control panel. With it
//! enabled the overlay is hidden and clicks reach the page, but they still
//! pause rotation through the wrapper path. Clicks inside the embedded page
//! are only visible to the host through [`EmbeddedMessage`], which is
//! treated like an overlay click.
//!
//! [`EmbeddedMessage`]: rotunda_types::input::EmbeddedMessage

use rotunda_types::config::Viewport;

use crate::panel::Rect;

/// Whether the embedded content receives clicks directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionMode {
    pub content_interaction_enabled: bool,
}

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRoute {
    /// Inside the control panel. The panel is stacked above the overlay.
    ControlPanel,
    /// On the visible overlay.
    Overlay,
    /// On the wrapper around the embedded page (overlay hidden).
    Wrapper,
}

/// Which detection path paused rotation. Selects the notification text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseSource {
    /// Overlay click, or wrapper click in display mode.
    ScreenClick,
    /// Wrapper click while content interaction is enabled.
    ContentClick,
    /// Click reported by the embedded page.
    EmbeddedClick,
}

#[derive(Debug)]
pub struct InteractionGate {
    mode: InteractionMode,
    viewport: Viewport,
}

impl InteractionGate {
    pub fn new(content_interaction_enabled: bool, viewport: Viewport) -> Self {
        Self {
            mode: InteractionMode {
                content_interaction_enabled,
            },
            viewport,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn content_interaction_enabled(&self) -> bool {
        self.mode.content_interaction_enabled
    }

    /// The overlay is shown exactly when content interaction is disabled.
    pub fn overlay_visible(&self) -> bool {
        !self.mode.content_interaction_enabled
    }

    /// Update the mode. Returns `true` if it changed.
    pub fn set_mode(&mut self, enabled: bool) -> bool {
        let changed = self.mode.content_interaction_enabled != enabled;
        self.mode.content_interaction_enabled = enabled;
        changed
    }

    /// Resolve the single target of a physical click.
    ///
    /// The control panel wins over everything; otherwise the overlay takes
    /// the click when visible and the wrapper gets it when not. `panel` is
    /// `None` when the scene has no panel. Clicks outside the viewport have
    /// no target.
    pub fn route(&self, x: i32, y: i32, panel: Option<Rect>) -> Option<ClickRoute> {
        let screen = Rect::new(0, 0, self.viewport.width, self.viewport.height);
        if !screen.contains(x, y) {
            return None;
        }
        if panel.is_some_and(|r| r.contains(x, y)) {
            Some(ClickRoute::ControlPanel)
        } else if self.overlay_visible() {
            Some(ClickRoute::Overlay)
        } else {
            Some(ClickRoute::Wrapper)
        }
    }

    /// Pause reason for a click on `route`, or `None` if it must not pause.
    pub fn pause_source(&self, route: ClickRoute) -> Option<PauseSource> {
        match route {
            ClickRoute::ControlPanel => None,
            ClickRoute::Overlay => Some(PauseSource::ScreenClick),
            ClickRoute::Wrapper if self.content_interaction_enabled() => {
                Some(PauseSource::ContentClick)
            },
            ClickRoute::Wrapper => Some(PauseSource::ScreenClick),
        }
    }

    /// Whether a click on `route` should also reach the embedded page.
    pub fn passes_through(&self, route: ClickRoute) -> bool {
        route == ClickRoute::Wrapper && self.content_interaction_enabled()
    }
}
