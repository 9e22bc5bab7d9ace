//! Syntax style tables
//!
//! Resolution runs in two stages: [`build_default_syntax`] gives every
//! category a baseline style with a few colors sampled from the scheme's
//! neutral ramp, then [`merge_syntax`] layers the scheme's [`ThemeSyntax`]
//! on top field by field. [`build_syntax`] runs both.

mod category;
mod defaults;
mod error;
mod merge;
mod overrides;
mod style;
mod table;

use std::borrow::Cow;

pub use category::SyntaxCategory;
pub use defaults::{build_default_syntax, build_default_syntax_with};
pub use error::SyntaxError;
pub use merge::{Merge, merge_syntax};
pub use overrides::ThemeSyntax;
pub use style::{FontWeight, SyntaxHighlightStyle, SyntaxStyleOverride};
pub use table::Syntax;

use crate::config::SyntaxDefaults;
use crate::theme::ColorScheme;

/// Resolve the full syntax table for a scheme
pub fn build_syntax(scheme: &ColorScheme) -> Syntax {
    build_syntax_with(scheme, &SyntaxDefaults::DEFAULT)
}

/// Resolve the full syntax table for a scheme with custom default settings
pub fn build_syntax_with(scheme: &ColorScheme, defaults: &SyntaxDefaults) -> Syntax {
    let default_syntax = build_default_syntax_with(scheme, defaults);
    let merged = match merge_syntax(&default_syntax, scheme) {
        Cow::Owned(merged) => Some(merged),
        Cow::Borrowed(_) => None,
    };
    merged.unwrap_or(default_syntax)
}
