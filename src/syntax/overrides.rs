//! Theme-authored syntax overrides

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::SyntaxCategory;
use super::error::SyntaxError;
use super::style::SyntaxStyleOverride;

/// Partial per-category styles supplied by a theme
///
/// Keys are kept as authored so that a theme mentioning a category this
/// crate does not know still loads; see [`ThemeSyntax::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeSyntax {
    entries: BTreeMap<String, SyntaxStyleOverride>,
}

impl ThemeSyntax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a JSON object keyed by category
    pub fn from_json(json: &str) -> Result<Self, SyntaxError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace the override for a raw key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        style: SyntaxStyleOverride,
    ) -> Option<SyntaxStyleOverride> {
        self.entries.insert(key.into(), style)
    }

    /// Builder: override a category
    pub fn with(mut self, category: SyntaxCategory, style: SyntaxStyleOverride) -> Self {
        self.insert(category.key(), style);
        self
    }

    /// Override for a raw key, if present
    pub fn get(&self, key: &str) -> Option<&SyntaxStyleOverride> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SyntaxStyleOverride)> {
        self.entries.iter().map(|(key, style)| (key.as_str(), style))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that do not name a known category
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| key.parse::<SyntaxCategory>().is_err())
            .map(String::as_str)
            .collect()
    }

    /// Fail on the first key that does not name a known category
    pub fn validate(&self) -> Result<(), SyntaxError> {
        for key in self.entries.keys() {
            key.parse::<SyntaxCategory>()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;

    #[test]
    fn parses_json_object() {
        let json = r##"{
            "comment": { "italic": true },
            "keyword": { "color": "#bb9af7", "weight": "bold" }
        }"##;
        let overrides = ThemeSyntax::from_json(json).unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("comment").unwrap().italic, Some(true));
        assert_eq!(overrides.get("keyword").unwrap().color, Some(Color::Rgb(187, 154, 247)));
    }

    #[test]
    fn malformed_json_is_invalid_overrides() {
        let err = ThemeSyntax::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidOverrides(_)));
    }

    #[test]
    fn unknown_keys_load_but_fail_validation() {
        let overrides = ThemeSyntax::from_json(r#"{"comment":{},"comment.block":{}}"#).unwrap();
        assert_eq!(overrides.unknown_keys(), vec!["comment.block"]);

        let err = overrides.validate().unwrap_err();
        assert_eq!(err.to_string(), "Unknown syntax category: \"comment.block\"");
    }

    #[test]
    fn known_keys_validate() {
        let overrides = ThemeSyntax::new()
            .with(SyntaxCategory::Comment, SyntaxStyleOverride::default().with_italic(true))
            .with(SyntaxCategory::StringRegex, SyntaxStyleOverride::default());
        assert!(overrides.validate().is_ok());
        assert!(overrides.unknown_keys().is_empty());
        assert!(overrides.get("string.regex").is_some());
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut overrides = ThemeSyntax::new();
        assert!(overrides.insert("tag", SyntaxStyleOverride::default()).is_none());
        let previous = overrides.insert("tag", SyntaxStyleOverride::default().with_underline(true));
        assert_eq!(previous, Some(SyntaxStyleOverride::default()));
        assert_eq!(overrides.len(), 1);
    }
}
