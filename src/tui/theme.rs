// Catppuccin palette, reduced to the colors the wizard actually draws.
// Mocha is the dark default, Latte the light variant.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Mocha, // Dark theme (default)
    Latte, // Light theme
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::Mocha
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub mauve: Color,
    pub red: Color,
    pub peach: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub lavender: Color,
    pub text: Color,
    pub subtext: Color,
    pub overlay: Color,
    pub surface: Color,
    pub base: Color,
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Mocha => Self::mocha(),
            ThemeVariant::Latte => Self::latte(),
        }
    }

    fn mocha() -> Self {
        Self {
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            peach: Color::Rgb(0xfa, 0xb3, 0x87),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            blue: Color::Rgb(0x89, 0xb4, 0xfa),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext: Color::Rgb(0xba, 0xc2, 0xde),
            overlay: Color::Rgb(0x7f, 0x84, 0x9c),
            surface: Color::Rgb(0x45, 0x47, 0x5a),
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
        }
    }

    fn latte() -> Self {
        Self {
            mauve: Color::Rgb(0x88, 0x39, 0xef),
            red: Color::Rgb(0xd2, 0x0f, 0x39),
            peach: Color::Rgb(0xfe, 0x64, 0x0b),
            yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
            green: Color::Rgb(0x40, 0xa0, 0x2b),
            blue: Color::Rgb(0x1e, 0x66, 0xf5),
            lavender: Color::Rgb(0x72, 0x87, 0xfd),
            text: Color::Rgb(0x4c, 0x4f, 0x69),
            subtext: Color::Rgb(0x5c, 0x5f, 0x77),
            overlay: Color::Rgb(0x8c, 0x8f, 0xa1),
            surface: Color::Rgb(0xbc, 0xc0, 0xcc),
            base: Color::Rgb(0xef, 0xf1, 0xf5),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}
