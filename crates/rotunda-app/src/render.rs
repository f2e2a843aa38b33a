//! Console rendering of the kiosk scene.
//!
//! Only what changed since the previous frame is printed: the embedded
//! page, the status notification, and the control panel rows.

use rotunda_core::Kiosk;
use rotunda_core::scene::ElementId;

/// What the console last showed.
#[derive(Debug, Default)]
pub struct ConsoleView {
    source: Option<String>,
    status: Option<String>,
    panel: Vec<String>,
    overlay: Option<bool>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines describing every change since the last call.
    pub fn update(&mut self, kiosk: &Kiosk) -> Vec<String> {
        let scene = kiosk.scene();
        let mut out = Vec::new();

        let source = scene
            .get(ElementId::PageFrame)
            .ok()
            .and_then(|el| el.source.clone());
        if source != self.source {
            if let Some(src) = &source {
                out.push(format!("page   -> {src}"));
            }
            self.source = source;
        }

        let overlay = scene
            .get(ElementId::InteractionOverlay)
            .ok()
            .map(|el| el.visible);
        if overlay != self.overlay {
            if let Some(visible) = overlay {
                out.push(format!(
                    "overlay {}",
                    if visible { "shown" } else { "hidden" }
                ));
            }
            self.overlay = overlay;
        }

        let status = scene
            .get(ElementId::StatusMessage)
            .ok()
            .filter(|el| el.visible)
            .and_then(|el| el.text.clone());
        if status != self.status {
            match &status {
                Some(text) => out.push(format!("status: {text}")),
                None => out.push("status cleared".to_string()),
            }
            self.status = status;
        }

        let panel = kiosk.panel_view().map(|v| v.lines()).unwrap_or_default();
        if panel != self.panel {
            out.extend(panel.iter().map(|line| format!("  | {line}")));
            self.panel = panel;
        }

        out
    }
}
