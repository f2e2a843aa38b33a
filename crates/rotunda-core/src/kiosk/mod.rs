//! The kiosk orchestrator.
//!
//! [`Kiosk`] owns every component and the shared timer queue. Hosts drive
//! it with two calls: [`Kiosk::handle_input`] for observed events and
//! [`Kiosk::tick`] for the passage of time. Between those calls nothing
//! happens.
//!
//! Operations that write a scene element check for it first. An absent
//! element is a markup problem, not a runtime fault: the operation logs a
//! warning and returns without changing state.

use rotunda_platform::{Millis, TimerId};
use rotunda_types::config::KioskConfig;
use rotunda_types::error::Result;
use rotunda_types::input::{EmbeddedMessage, InputEvent, PanelAction};
use rotunda_types::page::PageId;

use crate::gate::{ClickRoute, InteractionGate, PauseSource};
use crate::idle::{IdleMonitor, IdleOutcome};
use crate::panel::{ControlPanel, PanelSnapshot, PanelView, PanelWidget};
use crate::rotation::RotationController;
use crate::scene::{ElementId, Scene};
use crate::status::StatusNotifier;
use crate::strings::KioskStrings;
use crate::{KioskTimer, Timers};

/// Result of dispatching one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The kiosk consumed the event.
    Handled,
    /// The click should also be delivered to the embedded page.
    PassThrough,
    /// Host asked to shut down.
    Quit,
}

pub struct Kiosk {
    strings: KioskStrings,
    page_dir: String,
    scene: Scene,
    timers: Timers,
    rotation: RotationController,
    idle: IdleMonitor,
    gate: InteractionGate,
    panel: ControlPanel,
    status: StatusNotifier,
    now: Millis,
}

impl Kiosk {
    /// Build the kiosk and start rotating from the first page.
    pub fn new(config: &KioskConfig, scene: Scene, now: Millis) -> Self {
        let config = config.clone().normalized();
        let mut kiosk = Self {
            strings: KioskStrings::for_locale(config.locale),
            page_dir: config.page_dir.clone(),
            scene,
            timers: Timers::new(),
            rotation: RotationController::new(config.interval_secs),
            idle: IdleMonitor::new(config.idle_secs, now),
            gate: InteractionGate::new(config.content_interaction, config.viewport),
            panel: ControlPanel::new(config.panel),
            status: StatusNotifier::new(config.status_duration_ms),
            now,
        };

        log::info!(
            "Content interaction mode: {}",
            if config.content_interaction {
                "enabled"
            } else {
                "disabled"
            }
        );
        kiosk.warn_on_err(Self::sync_overlay);
        let first = kiosk.rotation.state().current_page();
        kiosk.change_page(first);
        kiosk.start_rotation();
        kiosk
    }

    // -- Accessors ----------------------------------------------------------

    pub fn rotation(&self) -> &RotationController {
        &self.rotation
    }

    pub fn idle(&self) -> &IdleMonitor {
        &self.idle
    }

    pub fn gate(&self) -> &InteractionGate {
        &self.gate
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn status(&self) -> &StatusNotifier {
        &self.status
    }

    pub fn strings(&self) -> &KioskStrings {
        &self.strings
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access for hosts that add or remove elements.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Instant of the last processed event or timer.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// When the host should call [`Kiosk::tick`] next.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// The rendered panel, if the controls element exists.
    pub fn panel_view(&self) -> Option<&PanelView> {
        self.scene
            .get(ElementId::Controls)
            .ok()
            .and_then(|el| el.panel.as_ref())
    }

    // -- Host entry points --------------------------------------------------

    /// Fire every timer due at or before `now`, in deadline order.
    ///
    /// Each callback sees its own deadline as the current time, so a jump
    /// of several seconds replays the intermediate ticks exactly.
    pub fn tick(&mut self, now: Millis) {
        while let Some(fired) = self.timers.pop_due(now) {
            self.now = self.now.max(fired.deadline);
            match fired.kind {
                KioskTimer::Advance => self.on_advance(),
                KioskTimer::Countdown => self.on_countdown(),
                KioskTimer::Idle => self.on_idle(fired.id),
                KioskTimer::StatusHide => self.on_status_hide(fired.id),
            }
        }
        self.now = self.now.max(now);
    }

    /// Dispatch one input event observed at `now`.
    ///
    /// Timers due before `now` fire first. Every activity event resets the
    /// idle monitor after its own handling, so a click that pauses rotation
    /// leaves the idle timer armed.
    pub fn handle_input(&mut self, now: Millis, event: &InputEvent) -> Dispatch {
        self.tick(now);

        let dispatch = match event {
            InputEvent::Quit => return Dispatch::Quit,
            InputEvent::PointerClick { x, y } => self.handle_click(*x, *y),
            InputEvent::Panel(action) => {
                self.apply_panel_action(*action);
                Dispatch::Handled
            },
            InputEvent::Embedded(EmbeddedMessage::Clicked) => {
                self.pause(PauseSource::EmbeddedClick);
                Dispatch::Handled
            },
            InputEvent::PointerMove { .. } | InputEvent::KeyPress(_) | InputEvent::Scroll { .. } => {
                Dispatch::Handled
            },
        };

        if event.is_activity() {
            self.reset_idle();
        }
        self.render_panel();
        dispatch
    }

    // -- Rotation -----------------------------------------------------------

    /// Start rotating with the current interval and a fresh countdown.
    pub fn start_rotation(&mut self) {
        let interval = self.rotation.interval_secs();
        self.rotation.start(interval, self.now, &mut self.timers);
        self.idle.cancel(&mut self.timers);
        self.render_panel();
    }

    /// Stop rotating and hand over to the idle monitor.
    pub fn stop_rotation(&mut self) {
        self.rotation.stop(&mut self.timers);
        self.reset_idle();
        self.render_panel();
    }

    pub fn toggle_rotation(&mut self) {
        if self.rotation.is_rotating() {
            self.stop_rotation();
        } else {
            self.start_rotation();
        }
    }

    /// Show `page` in the embedded frame. Timers are left alone, so manual
    /// navigation neither starts nor stops rotation.
    pub fn change_page(&mut self, page: PageId) {
        let source = page.source(&self.page_dir);
        match self.scene.get_mut(ElementId::PageFrame) {
            Ok(frame) => {
                frame.source = Some(source);
                self.rotation.select(page);
                log::info!("Page changed: {page}");
            },
            Err(e) => log::warn!("Cannot change page to {page}: {e}"),
        }
    }

    /// Apply a new rotation interval; a running rotation restarts.
    pub fn set_interval(&mut self, secs: u32) {
        self.rotation.set_interval(secs, self.now, &mut self.timers);
        self.render_panel();
    }

    // -- Idle ---------------------------------------------------------------

    /// Record activity now.
    pub fn reset_idle(&mut self) {
        let rotating = self.rotation.is_rotating();
        self.idle.reset(self.now, rotating, &mut self.timers);
    }

    pub fn set_idle_threshold(&mut self, secs: u32) {
        let rotating = self.rotation.is_rotating();
        self.idle
            .set_threshold(secs, self.now, rotating, &mut self.timers);
        self.render_panel();
    }

    // -- Interaction gate ---------------------------------------------------

    /// Switch between content interaction (overlay hidden) and display
    /// mode (overlay capturing clicks).
    pub fn set_content_interaction(&mut self, enabled: bool) {
        if !self.scene.contains(ElementId::InteractionOverlay) {
            log::warn!(
                "Cannot change interaction mode: element not found: {}",
                ElementId::InteractionOverlay
            );
            return;
        }
        self.gate.set_mode(enabled);
        self.warn_on_err(Self::sync_overlay);
        let message = if enabled {
            self.strings.content_mode_enabled
        } else {
            self.strings.display_mode_enabled
        };
        self.show_status(message, None);
        self.render_panel();
    }

    /// Stop rotation on behalf of a pause trigger and reset the idle timer.
    ///
    /// A second trigger for the same physical click finds rotation already
    /// stopped and only resets the idle timer.
    pub fn pause(&mut self, source: PauseSource) {
        if self.rotation.is_rotating() {
            self.stop_rotation();
            let message = match source {
                PauseSource::ScreenClick => self.strings.paused_by_screen_click,
                PauseSource::ContentClick => self.strings.paused_by_content_click,
                PauseSource::EmbeddedClick => self.strings.paused_by_embedded_click,
            };
            self.show_status(message, None);
        }
        self.reset_idle();
    }

    fn handle_click(&mut self, x: i32, y: i32) -> Dispatch {
        let panel = self
            .scene
            .contains(ElementId::Controls)
            .then(|| self.panel.bounds());
        let Some(route) = self.gate.route(x, y, panel) else {
            return Dispatch::Handled;
        };
        log::debug!("Click at ({x}, {y}) routed to {route:?}");
        if route == ClickRoute::ControlPanel {
            let action = self
                .panel_view()
                .and_then(|view| self.panel.hit(x, y, view))
                .and_then(PanelWidget::click_action);
            if let Some(action) = action {
                self.apply_panel_action(action);
            }
            return Dispatch::Handled;
        }
        if let Some(source) = self.gate.pause_source(route) {
            self.pause(source);
        }
        if self.gate.passes_through(route) {
            Dispatch::PassThrough
        } else {
            Dispatch::Handled
        }
    }

    fn sync_overlay(&mut self) -> Result<()> {
        let visible = self.gate.overlay_visible();
        self.scene.get_mut(ElementId::InteractionOverlay)?.visible = visible;
        if visible {
            log::info!("Display mode active: overlay shown");
        } else {
            log::info!("Content interaction active: overlay hidden");
        }
        Ok(())
    }

    // -- Control panel ------------------------------------------------------

    /// Flip the control panel between its collapsed and expanded forms.
    pub fn toggle_controls(&mut self) {
        if !self.scene.contains(ElementId::Controls) {
            log::warn!(
                "Cannot toggle controls: element not found: {}",
                ElementId::Controls
            );
            return;
        }
        self.panel.toggle_visibility();
        self.render_panel();
    }

    fn apply_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::ToggleRotation => self.toggle_rotation(),
            PanelAction::SelectPage(page) => self.change_page(page),
            PanelAction::SetInterval(secs) => self.set_interval(secs),
            PanelAction::SetIdleThreshold(secs) => self.set_idle_threshold(secs),
            PanelAction::SetContentInteraction(enabled) => self.set_content_interaction(enabled),
            PanelAction::ToggleVisibility => self.toggle_controls(),
        }
    }

    fn snapshot(&self) -> PanelSnapshot {
        let rotation = self.rotation.state();
        PanelSnapshot {
            rotating: rotation.is_rotating,
            seconds_remaining: rotation.seconds_remaining,
            interval_secs: rotation.interval_secs,
            idle_secs: self.idle.threshold_secs(),
            content_interaction: self.gate.content_interaction_enabled(),
        }
    }

    fn render_panel(&mut self) {
        let view = self.panel.render(&self.snapshot(), &self.strings);
        match self.scene.get_mut(ElementId::Controls) {
            Ok(el) => el.panel = Some(view),
            Err(e) => log::warn!("Cannot render control panel: {e}"),
        }
    }

    // -- Status -------------------------------------------------------------

    /// Display a transient notification, replacing the current one.
    pub fn show_status(&mut self, message: &str, duration_ms: Option<Millis>) {
        match self.scene.get_mut(ElementId::StatusMessage) {
            Ok(el) => {
                el.text = Some(message.to_string());
                el.visible = true;
            },
            Err(e) => {
                log::warn!("Cannot show status '{message}': {e}");
                return;
            },
        }
        self.status
            .show(message, duration_ms, self.now, &mut self.timers);
    }

    // -- Timer callbacks ----------------------------------------------------

    fn on_advance(&mut self) {
        let page = self.rotation.advance();
        self.change_page(page);
        self.render_panel();
    }

    fn on_countdown(&mut self) {
        self.rotation.countdown();
        self.render_panel();
    }

    fn on_idle(&mut self, id: TimerId) {
        match self.idle.on_fire(id, self.rotation.is_rotating()) {
            IdleOutcome::Resume => {
                self.start_rotation();
                let message = self.strings.resumed_after_idle;
                self.show_status(message, None);
            },
            IdleOutcome::Ignore => log::debug!("Idle timer fired while rotating; ignored"),
        }
    }

    fn on_status_hide(&mut self, id: TimerId) {
        if self.status.on_hide(id)
            && let Ok(el) = self.scene.get_mut(ElementId::StatusMessage)
        {
            el.visible = false;
        }
    }

    fn warn_on_err(&mut self, op: fn(&mut Self) -> Result<()>) {
        if let Err(e) = op(self) {
            log::warn!("{e}");
        }
    }
}

#[cfg(test)]
mod tests;
