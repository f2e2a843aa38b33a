//! The fixed set of localized documents the kiosk rotates through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KioskError;

/// One of the three localized variants of the kiosk document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Japanese,
    English,
    Chinese,
}

impl PageId {
    /// All pages in rotation order.
    pub const ALL: [PageId; 3] = [PageId::Japanese, PageId::English, PageId::Chinese];

    /// File name of the document, relative to the configured page directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Japanese => "ja.html",
            Self::English => "en.html",
            Self::Chinese => "ch.html",
        }
    }

    /// Short language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
            Self::Chinese => "ch",
        }
    }

    /// Position of this page in [`PageId::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Japanese => 0,
            Self::English => 1,
            Self::Chinese => 2,
        }
    }

    /// Look up a page by file name (`"en.html"`).
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.file_name() == name)
    }

    /// Navigation target for this page under `page_dir`.
    pub fn source(self, page_dir: &str) -> String {
        if page_dir.is_empty() {
            self.file_name().to_string()
        } else {
            format!("{}/{}", page_dir.trim_end_matches('/'), self.file_name())
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for PageId {
    type Err = KioskError;

    /// Accepts a language code (`"ja"`) or a file name (`"ja.html"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(s))
            .or_else(|| Self::from_file_name(s))
            .ok_or_else(|| KioskError::Config(format!("unknown page '{s}'")))
    }
}
