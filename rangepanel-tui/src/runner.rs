//! The blocking control loop: draw, wait for one event, apply one action.
//!
//! Single-threaded and strictly sequential — there are no timers, channels
//! or background work. The loop suspends on `event::read()` and applies at
//! most one state transition per wakeup; a resize simply falls through to
//! the next draw, which recenters the panel.

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::backend::Backend;
use ratatui::Terminal;

use rangepanel_core::Panel;

use crate::input;
use crate::layout::PanelLayout;
use crate::ui::{self, PanelText};

/// Run the panel until the user quits. The edited values are the only
/// output; the caller reads them from its own storage after this returns.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    panel: &mut Panel,
    text: &PanelText,
    layout: &PanelLayout,
) -> Result<()> {
    while panel.running() {
        terminal.draw(|f| ui::draw(f, panel, text, layout))?;

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = input::map_key(key) {
                    panel.apply(action);
                }
            }
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
    Ok(())
}
