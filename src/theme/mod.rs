//! Color schemes and the ramps they expose

mod tokyo_night;

use std::fmt;
use std::sync::Arc;

use ratatui::style::Color;

use crate::syntax::ThemeSyntax;

/// Maps a normalized position in `[0, 1]` to a concrete color
///
/// Low positions are the dark end of the ramp, `1.0` the bright end.
pub trait ColorRamp: Send + Sync {
    /// Sample the ramp at `position`
    fn at(&self, position: f32) -> Color;
}

impl<F> ColorRamp for F
where
    F: Fn(f32) -> Color + Send + Sync,
{
    fn at(&self, position: f32) -> Color {
        self(position)
    }
}

/// A stepped ramp over a fixed list of color stops
///
/// Sampling picks the nearest stop; there is no blending between stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    stops: Vec<Color>,
}

impl Ramp {
    /// Create a ramp from its stops, darkest first. Returns `None` when empty.
    pub fn new(stops: impl IntoIterator<Item = Color>) -> Option<Self> {
        let stops: Vec<Color> = stops.into_iter().collect();
        if stops.is_empty() { None } else { Some(Self { stops }) }
    }

    /// Create a ramp that yields the same color everywhere
    pub fn solid(color: Color) -> Self {
        Self { stops: vec![color] }
    }

    /// The ramp's stops, darkest first
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    fn index_of(&self, position: f32) -> usize {
        // NaN falls to the dark end
        let position = if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        ((position * last as f32).round() as usize).min(last)
    }
}

impl ColorRamp for Ramp {
    fn at(&self, position: f32) -> Color {
        self.stops[self.index_of(position)]
    }
}

/// Shared handle to a ramp
pub type SharedRamp = Arc<dyn ColorRamp>;

/// The ramps a color scheme exposes
#[derive(Clone)]
pub struct RampSet {
    pub neutral: SharedRamp,
    pub red: SharedRamp,
    pub orange: SharedRamp,
    pub yellow: SharedRamp,
    pub green: SharedRamp,
    pub cyan: SharedRamp,
    pub blue: SharedRamp,
    pub violet: SharedRamp,
    pub magenta: SharedRamp,
}

impl RampSet {
    /// Build a set where every hue falls back to the neutral ramp
    pub fn from_neutral(neutral: impl ColorRamp + 'static) -> Self {
        let neutral: SharedRamp = Arc::new(neutral);
        Self {
            red: Arc::clone(&neutral),
            orange: Arc::clone(&neutral),
            yellow: Arc::clone(&neutral),
            green: Arc::clone(&neutral),
            cyan: Arc::clone(&neutral),
            blue: Arc::clone(&neutral),
            violet: Arc::clone(&neutral),
            magenta: Arc::clone(&neutral),
            neutral,
        }
    }
}

impl fmt::Debug for RampSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RampSet").finish_non_exhaustive()
    }
}

/// A color scheme: ramps plus optional per-category syntax overrides
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub name: String,
    pub is_light: bool,
    pub ramps: RampSet,

    /// Partial syntax styles authored by the theme, if any
    pub syntax: Option<ThemeSyntax>,
}

impl ColorScheme {
    /// Create a dark scheme with no syntax overrides
    pub fn new(name: impl Into<String>, ramps: RampSet) -> Self {
        Self { name: name.into(), is_light: false, ramps, syntax: None }
    }

    /// Builder: attach syntax overrides
    pub fn with_syntax(mut self, syntax: ThemeSyntax) -> Self {
        self.syntax = Some(syntax);
        self
    }

    /// Builder: mark the scheme as light
    pub fn light(mut self) -> Self {
        self.is_light = true;
        self
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::tokyo_night()
    }
}
