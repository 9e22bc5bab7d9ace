//! The complete per-category style table

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::category::SyntaxCategory;
use super::style::SyntaxHighlightStyle;

/// A style for every syntax category
///
/// The table is backed by one slot per [`SyntaxCategory`], so a missing or
/// extra category cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    styles: [SyntaxHighlightStyle; SyntaxCategory::COUNT],
}

impl Syntax {
    /// Create a table where every category starts as a copy of `base`
    pub fn uniform(base: &SyntaxHighlightStyle) -> Self {
        Self { styles: std::array::from_fn(|_| base.clone()) }
    }

    /// Style for a category
    pub fn get(&self, category: SyntaxCategory) -> &SyntaxHighlightStyle {
        &self.styles[category.index()]
    }

    /// Mutable style for a category
    pub fn get_mut(&mut self, category: SyntaxCategory) -> &mut SyntaxHighlightStyle {
        &mut self.styles[category.index()]
    }

    /// Replace the style for a category
    pub fn set(&mut self, category: SyntaxCategory, style: SyntaxHighlightStyle) {
        self.styles[category.index()] = style;
    }

    /// Iterate over every category and its style, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (SyntaxCategory, &SyntaxHighlightStyle)> {
        SyntaxCategory::ALL.into_iter().zip(self.styles.iter())
    }

    /// Number of categories (always [`SyntaxCategory::COUNT`])
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Categories that still have no color assigned
    pub fn unassigned(&self) -> Vec<SyntaxCategory> {
        self.iter().filter(|(_, style)| !style.is_assigned()).map(|(c, _)| c).collect()
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::uniform(&SyntaxHighlightStyle::default())
    }
}

impl Serialize for Syntax {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (category, style) in self.iter() {
            map.serialize_entry(category.key(), style)?;
        }
        map.end()
    }
}
