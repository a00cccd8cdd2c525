use crate::app::state::Appearance;
use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    pub(crate) muted: Color,
    pub(crate) accent: Color,
    pub(crate) panel_bg: Color,
    pub(crate) border: Color,
    pub(crate) strict_border: Color,
    pub(crate) button_fg: Color,
    pub(crate) button_bg: Color,
    pub(crate) button_selected_fg: Color,
    pub(crate) button_selected_bg: Color,
    pub(crate) toast_fg: Color,
    pub(crate) toast_bg: Color,
    pub(crate) error_fg: Color,
}

const DARK: Palette = Palette {
    background: Color::Rgb(18, 18, 20),
    foreground: Color::Rgb(230, 230, 232),
    muted: Color::Rgb(140, 140, 150),
    accent: Color::Rgb(124, 193, 255),
    panel_bg: Color::Rgb(32, 32, 36),
    border: Color::Rgb(90, 90, 100),
    strict_border: Color::Rgb(232, 170, 90),
    button_fg: Color::Rgb(230, 230, 232),
    button_bg: Color::Rgb(52, 52, 58),
    button_selected_fg: Color::Rgb(18, 18, 20),
    button_selected_bg: Color::Rgb(124, 193, 255),
    toast_fg: Color::Rgb(230, 230, 232),
    toast_bg: Color::Rgb(44, 44, 50),
    error_fg: Color::Rgb(240, 110, 110),
};

const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    foreground: Color::Rgb(24, 24, 27),
    muted: Color::Rgb(113, 113, 122),
    accent: Color::Rgb(37, 99, 235),
    panel_bg: Color::Rgb(255, 255, 255),
    border: Color::Rgb(212, 212, 216),
    strict_border: Color::Rgb(217, 119, 6),
    button_fg: Color::Rgb(24, 24, 27),
    button_bg: Color::Rgb(228, 228, 231),
    button_selected_fg: Color::Rgb(255, 255, 255),
    button_selected_bg: Color::Rgb(37, 99, 235),
    toast_fg: Color::Rgb(24, 24, 27),
    toast_bg: Color::Rgb(228, 228, 231),
    error_fg: Color::Rgb(185, 28, 28),
};

pub(crate) const fn palette_for(appearance: Appearance) -> Palette {
    match appearance {
        Appearance::Dark => DARK,
        Appearance::Light => LIGHT,
    }
}
