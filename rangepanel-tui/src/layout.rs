//! Fixed panel geometry.
//!
//! The panel does not size itself from content: width, height, margins and
//! the slider track width are constants, built once and passed through the
//! draw path unchanged.

use ratatui::layout::Rect;

/// Fixed panel geometry, in character cells.
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    /// Outer panel width, border included.
    pub width: u16,
    /// Outer panel height, border included.
    pub height: u16,
    /// Columns between the border and the control rows.
    pub left_margin: u16,
    /// Cells in a slider track; marker position is value * width / 100.
    pub slider_width: u16,
    /// Rows reserved at the panel bottom for the key legend.
    pub footer_height: u16,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            width: 52,
            height: 22,
            left_margin: 6,
            slider_width: 40,
            footer_height: 4,
        }
    }
}

/// Center a fixed-size rect on `area`, shrinking it when the terminal is
/// smaller than the panel.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
