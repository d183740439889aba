//! Colour scheme preference.

use super::glyph::Glyph;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Light -> Dark -> System -> Light.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    /// Value written to the `data-theme` attribute.
    pub fn css_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Theme::Light => Glyph::Sun,
            Theme::Dark => Glyph::Moon,
            Theme::System => Glyph::Monitor,
        }
    }
}
