//! Color palettes for light and dark mode

use ratatui::style::Color;

use crate::app::ThemeMode;

/// Resolved colors for one theme mode.
///
/// Indexed terminal colors only, so both palettes degrade sanely on
/// 16-color terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub error: Color,
    pub loading: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: Color::White,
                text: Color::Black,
                dim: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
                selection_fg: Color::White,
                selection_bg: Color::Blue,
                error: Color::Red,
                loading: Color::Magenta,
            },
            ThemeMode::Dark => Self {
                background: Color::Black,
                text: Color::Gray,
                dim: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                selection_fg: Color::Black,
                selection_bg: Color::Cyan,
                error: Color::LightRed,
                loading: Color::Yellow,
            },
        }
    }
}
