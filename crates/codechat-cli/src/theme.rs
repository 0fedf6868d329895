use ratatui::style::Color;

/// Colours the TUI draws with. Tool lines and timestamps use `muted`.
#[derive(Clone)]
pub struct Theme {
    pub name: &'static str,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    /// Status bar while an upload or exchange is running.
    pub busy: Color,
    pub user_color: Color,
    pub assistant_color: Color,
    pub border: Color,
}

const PALETTES: [Theme; 3] = [
    Theme {
        name: "dark",
        fg: Color::Rgb(220, 220, 220),
        accent: Color::Rgb(122, 162, 247),
        muted: Color::DarkGray,
        error: Color::Rgb(247, 118, 142),
        busy: Color::Rgb(224, 175, 104),
        user_color: Color::Cyan,
        assistant_color: Color::Green,
        border: Color::Rgb(60, 60, 60),
    },
    Theme {
        name: "tokyo-night",
        fg: Color::Rgb(169, 177, 214),
        accent: Color::Rgb(122, 162, 247),
        muted: Color::Rgb(86, 95, 137),
        error: Color::Rgb(247, 118, 142),
        busy: Color::Rgb(224, 175, 104),
        user_color: Color::Rgb(122, 162, 247),
        assistant_color: Color::Rgb(158, 206, 106),
        border: Color::Rgb(52, 53, 74),
    },
    Theme {
        name: "dracula",
        fg: Color::Rgb(248, 248, 242),
        accent: Color::Rgb(255, 121, 198),
        muted: Color::Rgb(98, 114, 164),
        error: Color::Rgb(255, 85, 85),
        busy: Color::Rgb(241, 250, 140),
        user_color: Color::Rgb(139, 233, 253),
        assistant_color: Color::Rgb(80, 250, 123),
        border: Color::Rgb(68, 71, 90),
    },
];

impl Theme {
    /// Unknown names fall back to `dark`.
    pub fn by_name(name: &str) -> Self {
        PALETTES
            .iter()
            .find(|theme| theme.name == name)
            .unwrap_or(&PALETTES[0])
            .clone()
    }

    pub fn is_known(name: &str) -> bool {
        PALETTES.iter().any(|theme| theme.name == name)
    }

    pub fn all_names() -> Vec<&'static str> {
        PALETTES.iter().map(|theme| theme.name).collect()
    }
}
