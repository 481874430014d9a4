use ratatui::style::{Color, Modifier, Style};

use crate::models::ThemeName;

/// One of the two fixed widget palettes. The active palette lives on the App
/// and is swapped wholesale when the theme toggles.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_dim: Color,
    pub gold: Color,
    pub green: Color,
    pub amber: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(18, 16, 14),
    surface: Color::Rgb(28, 25, 20),
    border: Color::Rgb(55, 48, 36),
    text: Color::Rgb(230, 218, 196),
    text_dim: Color::Rgb(130, 118, 96),
    gold: Color::Rgb(196, 160, 68),
    green: Color::Rgb(92, 148, 92),
    amber: Color::Rgb(210, 138, 60),
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 241, 231),
    surface: Color::Rgb(252, 248, 240),
    border: Color::Rgb(208, 196, 172),
    text: Color::Rgb(54, 46, 32),
    text_dim: Color::Rgb(138, 126, 102),
    gold: Color::Rgb(158, 120, 28),
    green: Color::Rgb(56, 110, 56),
    amber: Color::Rgb(176, 104, 34),
};

impl Palette {
    pub fn for_theme(name: ThemeName) -> Palette {
        match name {
            ThemeName::Light => LIGHT,
            ThemeName::Dark => DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn gold(&self) -> Style {
        Style::default().fg(self.gold)
    }

    pub fn green(&self) -> Style {
        Style::default().fg(self.green)
    }

    pub fn amber(&self) -> Style {
        Style::default().fg(self.amber)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
