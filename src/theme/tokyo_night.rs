//! Tokyo Night color scheme

use std::sync::Arc;

use ratatui::style::Color;

use super::{ColorScheme, Ramp, RampSet};

/// Neutral ramp, background to brightest foreground
const NEUTRAL: [Color; 8] = [
    Color::Rgb(26, 27, 38),    // #1a1b26
    Color::Rgb(36, 40, 59),    // #24283b
    Color::Rgb(65, 72, 104),   // #414868
    Color::Rgb(86, 95, 137),   // #565f89
    Color::Rgb(115, 122, 162), // #737aa2
    Color::Rgb(154, 165, 206), // #9aa5ce
    Color::Rgb(169, 177, 214), // #a9b1d6
    Color::Rgb(192, 202, 245), // #c0caf5
];

fn accent(dim: Color, bright: Color) -> Ramp {
    Ramp { stops: vec![dim, bright] }
}

impl ColorScheme {
    pub fn tokyo_night() -> Self {
        let ramps = RampSet {
            neutral: Arc::new(Ramp { stops: NEUTRAL.to_vec() }),
            red: Arc::new(accent(Color::Rgb(145, 76, 84), Color::Rgb(247, 118, 142))), // #f7768e
            orange: Arc::new(accent(Color::Rgb(150, 95, 62), Color::Rgb(255, 158, 100))), // #ff9e64
            yellow: Arc::new(accent(Color::Rgb(135, 106, 64), Color::Rgb(224, 175, 104))), // #e0af68
            green: Arc::new(accent(Color::Rgb(94, 122, 64), Color::Rgb(158, 206, 106))), // #9ece6a
            cyan: Arc::new(accent(Color::Rgb(75, 124, 153), Color::Rgb(125, 207, 255))), // #7dcfff
            blue: Arc::new(accent(Color::Rgb(73, 97, 148), Color::Rgb(122, 162, 247))), // #7aa2f7
            violet: Arc::new(accent(Color::Rgb(112, 92, 148), Color::Rgb(187, 154, 247))), // #bb9af7
            magenta: Arc::new(accent(Color::Rgb(133, 83, 148), Color::Rgb(222, 138, 247))), // #de8af7
        };
        ColorScheme::new("Tokyo Night", ramps)
    }
}
