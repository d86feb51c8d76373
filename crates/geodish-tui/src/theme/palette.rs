//! Color palettes for the light and dark themes.

use geodish_app::Theme;
use ratatui::style::Color;

/// Resolved color set for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Background layers
    pub background: Color,
    pub popup_bg: Color,

    // Borders
    pub border_dim: Color,
    pub border_active: Color,

    // Accent
    pub accent: Color,
    pub contrast_fg: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Alert severities
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::White,
    popup_bg: Color::Gray,

    border_dim: Color::Gray,
    border_active: Color::Blue,

    accent: Color::Blue,
    contrast_fg: Color::White,

    text_primary: Color::Black,
    text_secondary: Color::DarkGray,
    text_muted: Color::Gray,

    info: Color::Blue,
    success: Color::Green,
    warning: Color::Yellow,
    danger: Color::Red,
};

pub const DARK: Palette = Palette {
    background: Color::Black,
    popup_bg: Color::DarkGray,

    border_dim: Color::DarkGray,
    border_active: Color::Cyan,

    accent: Color::Cyan,
    contrast_fg: Color::Black,

    text_primary: Color::White,
    text_secondary: Color::Gray,
    text_muted: Color::DarkGray,

    info: Color::LightBlue,
    success: Color::LightGreen,
    warning: Color::LightYellow,
    danger: Color::LightRed,
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_per_theme() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text_primary, dark.text_primary);
    }
}
