//! Tag entity model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use propdocs_core::types::TagId;

/// Preset tag colors. Several tags may share a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Amber.
    Amber,
    /// Red.
    Red,
}

impl TagColor {
    /// The full palette.
    pub const PALETTE: [TagColor; 4] = [
        TagColor::Blue,
        TagColor::Green,
        TagColor::Amber,
        TagColor::Red,
    ];

    /// Hex display value.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Blue => "#3b82f6",
            Self::Green => "#22c55e",
            Self::Amber => "#f59e0b",
            Self::Red => "#ef4444",
        }
    }

    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PALETTE
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tag color '{s}'"))
    }
}

/// A label attached to files for search and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: TagId,
    /// Display name.
    pub name: String,
    /// Display color.
    pub color: TagColor,
}

impl Tag {
    /// Create a new tag.
    pub fn new(name: impl Into<String>, color: TagColor) -> Self {
        Self {
            id: TagId::new(),
            name: name.into(),
            color,
        }
    }
}
