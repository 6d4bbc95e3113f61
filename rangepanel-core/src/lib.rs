//! RangePanel Core — the control-panel state machine.
//!
//! This crate contains everything that is not presentation:
//! - Named input actions, as delivered by an external key mapper
//! - The settings binding, a non-owning view over caller storage
//! - Control descriptions (toggle, single- and dual-handle sliders)
//! - The panel controller: selection, handle switching, value stepping

pub mod action;
pub mod binding;
pub mod panel;

pub use action::Action;
pub use binding::SettingsBinding;
pub use panel::{ControlSpec, Panel};
