//! Kiosk configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Shortest allowed rotation interval.
pub const MIN_INTERVAL_SECS: u32 = 1;
/// Shortest allowed idle threshold.
pub const MIN_IDLE_SECS: u32 = 5;

/// Language used for control panel labels and status notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
}

/// Size of the kiosk display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Top-left corner of the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPlacement {
    pub x: i32,
    pub y: i32,
}

impl Default for PanelPlacement {
    fn default() -> Self {
        Self { x: 10, y: 10 }
    }
}

/// Top-level kiosk configuration (`rotunda.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Seconds each page stays on screen while rotating.
    #[serde(default = "default_interval")]
    pub interval_secs: u32,
    /// Seconds without activity before paused rotation resumes.
    #[serde(default = "default_idle")]
    pub idle_secs: u32,
    /// Whether clicks reach the embedded page (overlay hidden) at startup.
    #[serde(default = "yes")]
    pub content_interaction: bool,
    /// Default display time for status notifications.
    #[serde(default = "default_status_duration")]
    pub status_duration_ms: u64,
    /// Directory prefix for page sources.
    #[serde(default)]
    pub page_dir: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub panel: PanelPlacement,
}

fn default_interval() -> u32 {
    60
}
fn default_idle() -> u32 {
    30
}
fn default_status_duration() -> u64 {
    3000
}
fn yes() -> bool {
    true
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            idle_secs: default_idle(),
            content_interaction: true,
            status_duration_ms: default_status_duration(),
            page_dir: String::new(),
            locale: Locale::default(),
            viewport: Viewport::default(),
            panel: PanelPlacement::default(),
        }
    }
}

impl KioskConfig {
    /// Parse a config from TOML text. Values are normalized.
    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        Ok(cfg.normalized())
    }

    /// Load and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Clamp interval and idle threshold to their minimums.
    pub fn normalized(mut self) -> Self {
        if self.interval_secs < MIN_INTERVAL_SECS {
            log::warn!(
                "interval_secs {} below minimum, using {MIN_INTERVAL_SECS}",
                self.interval_secs
            );
            self.interval_secs = MIN_INTERVAL_SECS;
        }
        if self.idle_secs < MIN_IDLE_SECS {
            log::warn!(
                "idle_secs {} below minimum, using {MIN_IDLE_SECS}",
                self.idle_secs
            );
            self.idle_secs = MIN_IDLE_SECS;
        }
        self
    }
}
