//! Settings for default syntax table generation

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::syntax::{FontWeight, SyntaxHighlightStyle};

/// Attributes every category starts from before any color is assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStyle {
    pub weight: FontWeight,
    pub underline: bool,
    pub italic: bool,
}

impl BaseStyle {
    pub const DEFAULT: Self = Self { weight: FontWeight::Normal, underline: false, italic: false };
}

impl Default for BaseStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How the default syntax table is generated
///
/// Read-only during resolution; every table gets its own copy of the base style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxDefaults {
    /// Style shared by every category
    pub base: BaseStyle,

    /// Neutral ramp position for `comment` and `comment.doc`
    pub comment_position: f32,

    /// Neutral ramp position for `primary`
    pub primary_position: f32,

    /// Neutral ramp position for `predictive`
    pub predictive_position: f32,
}

impl SyntaxDefaults {
    pub const DEFAULT: Self = Self {
        base: BaseStyle::DEFAULT,
        comment_position: 0.71,
        primary_position: 1.0,
        predictive_position: 0.57,
    };

    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read syntax defaults from {:?}", path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse syntax defaults in {:?}", path))
    }

    /// The base style as an unassigned highlight style
    pub fn base_style(&self) -> SyntaxHighlightStyle {
        SyntaxHighlightStyle {
            color: None,
            weight: self.base.weight,
            underline: self.base.underline,
            italic: self.base.italic,
            fallbacks: Vec::new(),
        }
    }
}

impl Default for SyntaxDefaults {
    fn default() -> Self {
        Self::DEFAULT
    }
}
