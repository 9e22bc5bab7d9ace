//! Syntable - syntax-highlighting style tables for editor themes
//!
//! Syntable derives a style for every recognized syntax category from a
//! color scheme's ramps, then layers the scheme's partial overrides on top
//! without losing any default field the overrides leave out.

pub mod config;
pub mod syntax;
pub mod theme;

pub use config::SyntaxDefaults;
pub use syntax::{
    FontWeight, Merge, Syntax, SyntaxCategory, SyntaxError, SyntaxHighlightStyle,
    SyntaxStyleOverride, ThemeSyntax, build_default_syntax, build_syntax, merge_syntax,
};
pub use theme::{ColorRamp, ColorScheme, Ramp, RampSet};
