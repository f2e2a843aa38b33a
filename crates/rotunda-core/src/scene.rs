//! Scene: registry of the named UI elements the kiosk writes to.
//!
//! Hosts build the scene from their markup and may leave elements out.
//! Lookups of absent elements return [`KioskError::MissingElement`], which
//! the kiosk turns into a warning instead of a failure.

use std::collections::HashMap;
use std::fmt;

use rotunda_types::error::{KioskError, Result};

use crate::panel::PanelView;

/// Elements the kiosk knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Embedded frame showing the current page.
    PageFrame,
    /// Control panel container.
    Controls,
    /// Transient status notification.
    StatusMessage,
    /// Full-viewport click-capturing overlay.
    InteractionOverlay,
}

impl ElementId {
    pub const ALL: [ElementId; 4] = [
        ElementId::PageFrame,
        ElementId::Controls,
        ElementId::StatusMessage,
        ElementId::InteractionOverlay,
    ];

    /// Markup name of the element.
    pub fn name(self) -> &'static str {
        match self {
            Self::PageFrame => "pageFrame",
            Self::Controls => "controls",
            Self::StatusMessage => "statusMessage",
            Self::InteractionOverlay => "interactionOverlay",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Presentation state of one element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub visible: bool,
    /// Text content (status message).
    pub text: Option<String>,
    /// Navigation target (embedded frame).
    pub source: Option<String>,
    /// Rendered control panel tree (controls container).
    pub panel: Option<PanelView>,
}

/// Named element registry.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: HashMap<ElementId, Element>,
}

impl Scene {
    /// An empty scene with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene containing every element the kiosk uses.
    ///
    /// The frame and controls start visible; the status message and
    /// overlay start hidden.
    pub fn standard() -> Self {
        let mut scene = Self::new();
        for id in ElementId::ALL {
            let el = scene.create(id);
            el.visible = matches!(id, ElementId::PageFrame | ElementId::Controls);
        }
        scene
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Create (or return the existing) element.
    pub fn create(&mut self, id: ElementId) -> &mut Element {
        self.elements.entry(id).or_default()
    }

    pub fn get(&self, id: ElementId) -> Result<&Element> {
        self.elements
            .get(&id)
            .ok_or(KioskError::MissingElement(id.name()))
    }

    pub fn get_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements
            .get_mut(&id)
            .ok_or(KioskError::MissingElement(id.name()))
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }
}
