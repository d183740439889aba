//! Symbolic icon references and the stroke paths they resolve to.

/// Every glyph the shell draws. Paths are drawn on a 24x24 grid with a
/// round-capped 2px stroke and no fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Home,
    Bell,
    User,
    LogIn,
    Menu,
    Close,
    Sun,
    Moon,
    Monitor,
}

impl Glyph {
    pub const ALL: [Glyph; 9] = [
        Glyph::Home,
        Glyph::Bell,
        Glyph::User,
        Glyph::LogIn,
        Glyph::Menu,
        Glyph::Close,
        Glyph::Sun,
        Glyph::Moon,
        Glyph::Monitor,
    ];

    /// SVG `d` attributes, one `<path>` each.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Home => &[
                "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            Glyph::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            Glyph::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            ],
            Glyph::LogIn => &[
                "M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4",
                "M10 17l5-5-5-5",
                "M15 12H3",
            ],
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Glyph::Close => &["M18 6L6 18", "M6 6l12 12"],
            Glyph::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "M4.93 4.93l1.41 1.41",
                "M17.66 17.66l1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "M6.34 17.66l-1.41 1.41",
                "M19.07 4.93l-1.41 1.41",
            ],
            Glyph::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            Glyph::Monitor => &[
                "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M8 21h8",
                "M12 17v4",
            ],
        }
    }

    /// Stable name used for the `data-glyph` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Home => "home",
            Glyph::Bell => "bell",
            Glyph::User => "user",
            Glyph::LogIn => "log-in",
            Glyph::Menu => "menu",
            Glyph::Close => "close",
            Glyph::Sun => "sun",
            Glyph::Moon => "moon",
            Glyph::Monitor => "monitor",
        }
    }
}
