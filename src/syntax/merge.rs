//! Layering theme overrides onto a default table

use std::borrow::Cow;

use super::category::SyntaxCategory;
use super::style::{SyntaxHighlightStyle, SyntaxStyleOverride};
use super::table::Syntax;
use crate::theme::ColorScheme;

/// Refine a value in place with a partial description of it
pub trait Merge {
    type Refinement;

    fn merge(&mut self, refinement: &Self::Refinement);
}

/// Sequences concatenate: the refinement's items go after the existing ones.
impl<T: Clone> Merge for Vec<T> {
    type Refinement = Vec<T>;

    fn merge(&mut self, refinement: &Self::Refinement) {
        self.extend_from_slice(refinement);
    }
}

impl Merge for SyntaxHighlightStyle {
    type Refinement = SyntaxStyleOverride;

    fn merge(&mut self, refinement: &Self::Refinement) {
        if let Some(color) = refinement.color {
            self.color = Some(color);
        }
        if let Some(weight) = refinement.weight {
            self.weight = weight;
        }
        if let Some(underline) = refinement.underline {
            self.underline = underline;
        }
        if let Some(italic) = refinement.italic {
            self.italic = italic;
        }
        if let Some(fallbacks) = &refinement.fallbacks {
            self.fallbacks.merge(fallbacks);
        }
    }
}

/// Apply the scheme's syntax overrides to `defaults`
///
/// Without overrides the defaults come back borrowed, untouched. Otherwise a
/// new table is returned; neither input is modified. Override keys that name
/// no known category are skipped with a warning.
pub fn merge_syntax<'a>(defaults: &'a Syntax, scheme: &ColorScheme) -> Cow<'a, Syntax> {
    let Some(overrides) = &scheme.syntax else {
        return Cow::Borrowed(defaults);
    };

    let mut merged = defaults.clone();
    let mut applied = 0;
    for (key, refinement) in overrides.iter() {
        match key.parse::<SyntaxCategory>() {
            Ok(category) => {
                merged.get_mut(category).merge(refinement);
                applied += 1;
            }
            Err(e) => {
                tracing::warn!("Ignoring syntax override in {}: {}", scheme.name, e);
            }
        }
    }

    tracing::debug!(
        "Merged {} of {} syntax overrides for {}",
        applied,
        overrides.len(),
        scheme.name
    );

    Cow::Owned(merged)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::*;
    use crate::syntax::{FontWeight, ThemeSyntax};
    use crate::theme::{Ramp, RampSet};

    fn hex(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn scheme(syntax: Option<ThemeSyntax>) -> ColorScheme {
        let mut scheme = ColorScheme::new("Test", RampSet::from_neutral(Ramp::solid(Color::Gray)));
        scheme.syntax = syntax;
        scheme
    }

    fn black_defaults() -> Syntax {
        Syntax::uniform(&SyntaxHighlightStyle::color(hex("#000000")))
    }

    #[test]
    fn no_overrides_returns_defaults_itself() {
        let defaults = black_defaults();
        let merged = merge_syntax(&defaults, &scheme(None));

        assert!(matches!(merged, Cow::Borrowed(_)));
        assert!(std::ptr::eq(merged.as_ref(), &defaults));
    }

    #[test]
    fn empty_overrides_produce_equal_copy() {
        let defaults = black_defaults();
        let merged = merge_syntax(&defaults, &scheme(Some(ThemeSyntax::new())));
        assert!(matches!(merged, Cow::Owned(_)));
        assert_eq!(*merged, defaults);
    }

    #[test]
    fn unspecified_fields_survive() {
        let defaults = black_defaults();
        let overrides = ThemeSyntax::new()
            .with(SyntaxCategory::Comment, SyntaxStyleOverride::default().with_italic(true));

        let merged = merge_syntax(&defaults, &scheme(Some(overrides)));
        assert_eq!(
            *merged.get(SyntaxCategory::Comment),
            SyntaxHighlightStyle {
                color: Some(hex("#000000")),
                weight: FontWeight::Normal,
                underline: false,
                italic: true,
                fallbacks: Vec::new(),
            }
        );
    }

    #[test]
    fn untouched_categories_pass_through() {
        let defaults = black_defaults();
        let overrides = ThemeSyntax::new().with(
            SyntaxCategory::Keyword,
            SyntaxStyleOverride::default().with_color(hex("#bb9af7")).with_weight(FontWeight::Bold),
        );

        let merged = merge_syntax(&defaults, &scheme(Some(overrides)));
        for (category, style) in merged.iter() {
            if category == SyntaxCategory::Keyword {
                assert_eq!(style.color, Some(hex("#bb9af7")));
                assert_eq!(style.weight, FontWeight::Bold);
            } else {
                assert_eq!(style, defaults.get(category));
            }
        }
    }

    #[test]
    fn override_can_fill_unassigned_color() {
        let defaults = Syntax::default();
        let overrides = ThemeSyntax::new()
            .with(SyntaxCategory::String, SyntaxStyleOverride::default().with_color(Color::Green));

        let merged = merge_syntax(&defaults, &scheme(Some(overrides)));
        assert_eq!(merged.get(SyntaxCategory::String).color, Some(Color::Green));
        assert_eq!(merged.unassigned().len(), SyntaxCategory::COUNT - 1);
    }

    #[test]
    fn vec_merge_concatenates() {
        let mut sequence = vec!['a', 'b'];
        sequence.merge(&vec!['c']);
        assert_eq!(sequence, vec!['a', 'b', 'c']);
    }

    #[test]
    fn fallbacks_concatenate() {
        let mut defaults = black_defaults();
        defaults.get_mut(SyntaxCategory::Comment).fallbacks = vec![Color::Gray, Color::DarkGray];
        let overrides = ThemeSyntax::new().with(
            SyntaxCategory::Comment,
            SyntaxStyleOverride::default().with_fallbacks([Color::White]),
        );

        let merged = merge_syntax(&defaults, &scheme(Some(overrides)));
        assert_eq!(
            merged.get(SyntaxCategory::Comment).fallbacks,
            vec![Color::Gray, Color::DarkGray, Color::White]
        );
    }

    #[test]
    fn inputs_are_not_modified() {
        let defaults = black_defaults();
        let overrides = ThemeSyntax::new()
            .with(SyntaxCategory::Comment, SyntaxStyleOverride::default().with_fallbacks([Color::Red]))
            .with(SyntaxCategory::Title, SyntaxStyleOverride::default().with_underline(true));
        let scheme = scheme(Some(overrides.clone()));
        let before = defaults.clone();

        let merged = merge_syntax(&defaults, &scheme).into_owned();

        assert_eq!(defaults, before);
        assert_eq!(scheme.syntax, Some(overrides));
        assert!(merged.get(SyntaxCategory::Title).underline);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let defaults = black_defaults();
        let mut overrides = ThemeSyntax::new();
        overrides.insert("comment.block", SyntaxStyleOverride::default().with_italic(true));
        overrides.insert("comment", SyntaxStyleOverride::default().with_underline(true));

        let merged = merge_syntax(&defaults, &scheme(Some(overrides)));
        assert_eq!(merged.len(), SyntaxCategory::COUNT);
        assert!(merged.get(SyntaxCategory::Comment).underline);
        assert!(merged.iter().all(|(_, style)| !style.italic));
    }
}
