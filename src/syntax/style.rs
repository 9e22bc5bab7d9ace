//! Highlight styles and their partial overrides

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Font weight, thinnest to heaviest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    /// CSS-style numeric weight (100-900)
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

/// How one syntax category is rendered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxHighlightStyle {
    /// Foreground color. `None` means no color has been assigned yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    pub weight: FontWeight,
    pub underline: bool,
    pub italic: bool,

    /// Alternate colors to try, in order, when `color` cannot be shown
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<Color>,
}

impl SyntaxHighlightStyle {
    /// Create a style with just a color
    pub fn color(color: Color) -> Self {
        Self { color: Some(color), ..Default::default() }
    }

    /// Builder: set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Check whether a color has been assigned
    pub fn is_assigned(&self) -> bool {
        self.color.is_some()
    }
}

/// A partial style; every field left `None` keeps the underlying value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyntaxStyleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Appended after the underlying fallbacks, never replacing them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallbacks: Option<Vec<Color>>,
}

impl SyntaxStyleOverride {
    /// Builder: override color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder: override weight
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Builder: override underline
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Builder: override italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Builder: extra fallback colors
    pub fn with_fallbacks(mut self, fallbacks: impl IntoIterator<Item = Color>) -> Self {
        self.fallbacks = Some(fallbacks.into_iter().collect());
        self
    }

    /// Check whether this override changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
