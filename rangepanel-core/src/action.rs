//! Named input actions.
//!
//! The panel never sees raw key codes. An input mapper (see the TUI crate)
//! resolves key events to these actions; anything it cannot resolve is
//! dropped before it reaches the panel.

/// One resolved input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Activate the selected control (toggles the on/off flag).
    Confirm,
    /// Switch between handles within a multi-handle control.
    NextTarget,
    /// Apply the edited values and leave the panel.
    Quit,
}
