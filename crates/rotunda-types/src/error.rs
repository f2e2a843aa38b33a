//! Error types for Rotunda.

use std::io;

/// Errors produced by the Rotunda kiosk controller.
#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    /// A named UI element the operation depends on is absent from the scene.
    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("config error: {0}")]
    Config(String),

    /// A cross-boundary message from embedded content could not be understood.
    #[error("message error: {0}")]
    Message(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, KioskError>;
