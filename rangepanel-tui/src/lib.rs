//! RangePanel TUI - terminal presentation for the control panel
//!
//! Provides the pieces around the core state machine:
//! - Key-to-action mapping (arrows plus vim h/j/k/l)
//! - Fixed-size centered panel rendering (toggle rows, slider tracks)
//! - The blocking draw/read/apply loop

pub mod input;
pub mod layout;
pub mod runner;
pub mod theme;
pub mod ui;

pub use layout::PanelLayout;
pub use runner::run;
pub use ui::PanelText;
