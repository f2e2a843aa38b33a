//! Control panel view model.
//!
//! The panel holds no state beyond its hidden flag. [`ControlPanel::render`]
//! builds a fresh widget tree from a [`PanelSnapshot`] of the other
//! components; every widget carries the [`PanelAction`] it triggers, so a
//! rebuilt tree is always wired to current handlers.

use rotunda_types::config::{MIN_IDLE_SECS, MIN_INTERVAL_SECS, PanelPlacement};
use rotunda_types::input::PanelAction;
use rotunda_types::page::PageId;

use crate::strings::KioskStrings;

/// Height of one panel row in pixels.
pub const ROW_HEIGHT: u32 = 28;
/// Width of the expanded panel.
pub const PANEL_WIDTH: u32 = 320;
/// Width of the collapsed panel (single "show" button).
pub const COLLAPSED_WIDTH: u32 = 140;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (px, py) = (i64::from(px), i64::from(py));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x && px < x + i64::from(self.w) && py >= y && py < y + i64::from(self.h)
    }
}

/// Numeric configuration inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    Interval,
    IdleThreshold,
}

impl NumberField {
    pub fn min(self) -> u32 {
        match self {
            Self::Interval => MIN_INTERVAL_SECS,
            Self::IdleThreshold => MIN_IDLE_SECS,
        }
    }

    /// Action fired when the input's value changes.
    pub fn action(self, value: u32) -> PanelAction {
        match self {
            Self::Interval => PanelAction::SetInterval(value),
            Self::IdleThreshold => PanelAction::SetIdleThreshold(value),
        }
    }
}

/// One control in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelWidget {
    Button {
        label: String,
        action: PanelAction,
    },
    Text(String),
    NumberInput {
        label: String,
        field: NumberField,
        value: u32,
    },
    Checkbox {
        label: String,
        checked: bool,
    },
}

impl PanelWidget {
    /// Action fired by clicking this widget.
    pub fn click_action(&self) -> Option<PanelAction> {
        match self {
            Self::Button { action, .. } => Some(*action),
            Self::Checkbox { checked, .. } => Some(PanelAction::SetContentInteraction(!checked)),
            Self::Text(_) | Self::NumberInput { .. } => None,
        }
    }

    /// Action fired by entering `value` into this widget.
    pub fn change_action(&self, value: u32) -> Option<PanelAction> {
        match self {
            Self::NumberInput { field, .. } => Some(field.action(value)),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Button { label, .. } => format!("[{label}]"),
            Self::Text(text) => text.clone(),
            Self::NumberInput {
                label,
                field,
                value,
            } => format!("{label}<{value}> (min {})", field.min()),
            Self::Checkbox { label, checked } => {
                format!("[{}] {label}", if *checked { "x" } else { " " })
            },
        }
    }
}

/// Rendered panel tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub hidden: bool,
    pub rows: Vec<Vec<PanelWidget>>,
}

impl PanelView {
    pub fn widgets(&self) -> impl Iterator<Item = &PanelWidget> {
        self.rows.iter().flatten()
    }

    /// First button whose label is `label`.
    pub fn button(&self, label: &str) -> Option<&PanelWidget> {
        self.widgets()
            .find(|w| matches!(w, PanelWidget::Button { label: l, .. } if l == label))
    }

    /// The numeric input bound to `field`.
    pub fn input(&self, field: NumberField) -> Option<&PanelWidget> {
        self.widgets()
            .find(|w| matches!(w, PanelWidget::NumberInput { field: f, .. } if *f == field))
    }

    /// Countdown text, if the panel shows one.
    pub fn countdown_text(&self) -> Option<&str> {
        self.widgets().find_map(|w| match w {
            PanelWidget::Text(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// One line of plain text per row.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(PanelWidget::describe)
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect()
    }
}

/// Values the panel displays, read from the other components at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub rotating: bool,
    pub seconds_remaining: u32,
    pub interval_secs: u32,
    pub idle_secs: u32,
    pub content_interaction: bool,
}

#[derive(Debug)]
pub struct ControlPanel {
    hidden: bool,
    origin: PanelPlacement,
}

impl ControlPanel {
    pub fn new(origin: PanelPlacement) -> Self {
        Self {
            hidden: false,
            origin,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Flip between the collapsed and expanded panel. Returns the new
    /// hidden flag.
    pub fn toggle_visibility(&mut self) -> bool {
        self.hidden = !self.hidden;
        self.hidden
    }

    /// Screen area the panel occupies. Clicks here never reach the gate.
    pub fn bounds(&self) -> Rect {
        if self.hidden {
            Rect::new(self.origin.x, self.origin.y, COLLAPSED_WIDTH, ROW_HEIGHT)
        } else {
            Rect::new(self.origin.x, self.origin.y, PANEL_WIDTH, ROW_HEIGHT * 6)
        }
    }

    /// Widget under `(x, y)` in a view rendered by this panel.
    ///
    /// Rows are `ROW_HEIGHT` tall and split the panel width evenly between
    /// their widgets.
    pub fn hit<'a>(&self, x: i32, y: i32, view: &'a PanelView) -> Option<&'a PanelWidget> {
        let bounds = self.bounds();
        if !bounds.contains(x, y) {
            return None;
        }
        let dx = usize::try_from(i64::from(x) - i64::from(bounds.x)).ok()?;
        let dy = usize::try_from(i64::from(y) - i64::from(bounds.y)).ok()?;
        let row = view.rows.get(dy / ROW_HEIGHT as usize)?;
        let col = dx * row.len() / bounds.w as usize;
        row.get(col)
    }

    pub fn render(&self, snap: &PanelSnapshot, strings: &KioskStrings) -> PanelView {
        if self.hidden {
            return PanelView {
                hidden: true,
                rows: vec![vec![PanelWidget::Button {
                    label: strings.show_controls.to_string(),
                    action: PanelAction::ToggleVisibility,
                }]],
            };
        }

        let pages = PageId::ALL
            .into_iter()
            .map(|page| PanelWidget::Button {
                label: strings.page(page).to_string(),
                action: PanelAction::SelectPage(page),
            })
            .collect();

        PanelView {
            hidden: false,
            rows: vec![
                vec![
                    PanelWidget::Button {
                        label: strings.toggle_label(snap.rotating).to_string(),
                        action: PanelAction::ToggleRotation,
                    },
                    PanelWidget::Text(strings.countdown(snap.seconds_remaining)),
                ],
                pages,
                vec![PanelWidget::NumberInput {
                    label: strings.interval_label.to_string(),
                    field: NumberField::Interval,
                    value: snap.interval_secs,
                }],
                vec![PanelWidget::NumberInput {
                    label: strings.idle_label.to_string(),
                    field: NumberField::IdleThreshold,
                    value: snap.idle_secs,
                }],
                vec![PanelWidget::Button {
                    label: strings.hide_controls.to_string(),
                    action: PanelAction::ToggleVisibility,
                }],
                vec![PanelWidget::Checkbox {
                    label: strings.content_toggle.to_string(),
                    checked: snap.content_interaction,
                }],
            ],
        }
    }
}
