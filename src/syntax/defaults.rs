//! Default syntax table generation

use super::category::SyntaxCategory;
use super::table::Syntax;
use crate::config::SyntaxDefaults;
use crate::theme::ColorScheme;

/// Build the default table for a scheme with the stock settings
pub fn build_default_syntax(scheme: &ColorScheme) -> Syntax {
    build_default_syntax_with(scheme, &SyntaxDefaults::DEFAULT)
}

/// Build the default table for a scheme
///
/// Every category gets the base style. Only `comment`, `comment.doc`,
/// `primary` and `predictive` are colored, from the neutral ramp; every
/// other category is left unassigned (see [`Syntax::unassigned`]) until an
/// override supplies a color.
pub fn build_default_syntax_with(scheme: &ColorScheme, defaults: &SyntaxDefaults) -> Syntax {
    let mut syntax = Syntax::uniform(&defaults.base_style());
    let neutral = &scheme.ramps.neutral;

    let comment = neutral.at(defaults.comment_position);
    syntax.get_mut(SyntaxCategory::Comment).color = Some(comment);
    syntax.get_mut(SyntaxCategory::CommentDoc).color = Some(comment);
    syntax.get_mut(SyntaxCategory::Primary).color = Some(neutral.at(defaults.primary_position));
    syntax.get_mut(SyntaxCategory::Predictive).color =
        Some(neutral.at(defaults.predictive_position));

    tracing::debug!(
        "Built default syntax for {}: {} of {} categories unassigned",
        scheme.name,
        syntax.unassigned().len(),
        syntax.len()
    );

    syntax
}
