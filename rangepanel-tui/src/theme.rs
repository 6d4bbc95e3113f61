//! Style tokens for the panel — neon accents on the default background.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan — the selected control.
const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon orange — slider markers and values on unselected controls.
const WARNING: Color = Color::Rgb(255, 140, 0);
/// Steel blue — labels of unselected controls, hints.
const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Focus highlight for the active handle's marker and value.
pub fn highlight() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn panel_border() -> Style {
    muted()
}

pub fn panel_title() -> Style {
    text().add_modifier(Modifier::BOLD)
}
