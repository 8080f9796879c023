//! # Theme System
//!
//! Colour themes for the Folio TUI.
//!
//! ## Overview
//!
//! Rendering code never hardcodes a `ratatui::style::Color`; it asks the
//! active [`Theme`] for a semantic role instead. The theme can be cycled at
//! runtime with `t`, and the choice is persisted in the config file.
//!
//! ## Built-in Themes
//!
//! - **Sky** (default) - near-black background with sky-blue accents
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::Color;

use crate::content::HttpMethod;

/// All colors used by the Folio TUI, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    /// Panel background.
    pub bg: Color,
    /// Body text.
    pub fg: Color,
    /// Hints, separators, inactive buttons.
    pub fg_dim: Color,

    /// Focused borders, active buttons, prompts.
    pub accent: Color,
    /// Background of the active item's row.
    pub accent_soft: Color,

    /// Badge colour for GET requests.
    pub get: Color,
    /// Badge colour for POST requests.
    pub post: Color,

    /// Response status and the "Copied!" indicator.
    pub success: Color,
    /// "Awaiting send" and other pending states.
    pub warning: Color,
}

impl Theme {
    /// All built-in themes, in cycling order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after `name` in cycling order. Unknown names restart at the
    /// default.
    pub fn next_after(name: &str) -> &'static Theme {
        let position = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name));
        match position {
            Some(i) => &BUILT_IN_THEMES[(i + 1) % BUILT_IN_THEMES.len()],
            None => Self::default_theme(),
        }
    }

    pub fn method_color(&self, method: HttpMethod) -> Color {
        match method {
            HttpMethod::Get => self.get,
            HttpMethod::Post => self.post,
        }
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Sky (default)
    Theme {
        name: "Sky",
        bg: Color::Rgb(10, 10, 10),            // neutral-950
        fg: Color::Rgb(229, 229, 229),         // neutral-200
        fg_dim: Color::Rgb(115, 115, 115),     // neutral-500
        accent: Color::Rgb(14, 165, 233),      // sky-500
        accent_soft: Color::Rgb(12, 74, 110),  // sky-900
        get: Color::Rgb(52, 211, 153),         // emerald-400
        post: Color::Rgb(251, 191, 36),        // amber-400
        success: Color::Rgb(74, 222, 128),     // green-400
        warning: Color::Rgb(251, 191, 36),     // amber-400
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),            // base
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        accent: Color::Rgb(116, 199, 236),     // sapphire
        accent_soft: Color::Rgb(49, 50, 68),   // surface0
        get: Color::Rgb(166, 227, 161),        // green
        post: Color::Rgb(250, 179, 135),       // peach
        success: Color::Rgb(166, 227, 161),    // green
        warning: Color::Rgb(249, 226, 175),    // yellow
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),     // cyan
        accent_soft: Color::Rgb(68, 71, 90),
        get: Color::Rgb(80, 250, 123),
        post: Color::Rgb(255, 184, 108),       // orange
        success: Color::Rgb(80, 250, 123),
        warning: Color::Rgb(241, 250, 140),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),     // frost
        accent_soft: Color::Rgb(67, 76, 94),
        get: Color::Rgb(163, 190, 140),
        post: Color::Rgb(208, 135, 112),
        success: Color::Rgb(163, 190, 140),
        warning: Color::Rgb(235, 203, 139),
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        accent_soft: Color::Rgb(80, 73, 69),
        get: Color::Rgb(184, 187, 38),
        post: Color::Rgb(254, 128, 25),
        success: Color::Rgb(184, 187, 38),
        warning: Color::Rgb(250, 189, 47),
    },
];
