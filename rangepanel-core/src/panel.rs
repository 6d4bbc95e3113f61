//! Panel controller — selection, handle switching, value stepping.
//!
//! The panel is a closed, always-valid state machine: every mutation path
//! re-clamps, so no action sequence can produce an out-of-range value or
//! break the minimum gap between range handles.

use crate::action::Action;
use crate::binding::SettingsBinding;

/// Slider values move in steps of this size.
pub const VALUE_STEP: i32 = 5;
/// Lowest value reachable through the panel. 0 is intentionally not editable.
pub const VALUE_MIN: i32 = 5;
/// Highest value reachable through the panel. 95 and 100 are not editable.
pub const VALUE_MAX: i32 = 90;
/// A range slider keeps its low handle at least this far below its high one.
pub const MIN_GAP: i32 = 5;

/// One editable item in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSpec {
    /// On/off flag, toggled with `Confirm`.
    Toggle,
    /// Percentage slider with one or more independently movable handles.
    /// Each handle consumes one binding slot, in order.
    Slider { handles: usize },
}

impl ControlSpec {
    /// Binding slots this control consumes.
    pub fn slots(&self) -> usize {
        match self {
            ControlSpec::Toggle => 0,
            ControlSpec::Slider { handles } => *handles,
        }
    }
}

/// The panel controller. Owns UI state (which control is selected, which
/// handle is active) and writes edited values through the binding.
pub struct Panel<'a> {
    controls: Vec<ControlSpec>,
    binding: SettingsBinding<'a>,
    selected: usize,
    active_handle: usize,
    running: bool,
}

impl<'a> Panel<'a> {
    /// Build a panel over `controls` editing through `binding`.
    ///
    /// The binding must carry exactly one slot per slider handle; a mismatch
    /// is a programming error in the caller's wiring, not a runtime
    /// condition, so it fails loudly here.
    pub fn new(controls: Vec<ControlSpec>, binding: SettingsBinding<'a>) -> Self {
        let wanted: usize = controls.iter().map(ControlSpec::slots).sum();
        assert_eq!(
            wanted,
            binding.slot_count(),
            "controls need {wanted} binding slot(s), binding has {}",
            binding.slot_count()
        );
        assert!(!controls.is_empty(), "panel needs at least one control");
        for control in &controls {
            if let ControlSpec::Slider { handles } = control {
                assert!(
                    (1..=2).contains(handles),
                    "sliders carry one or two handles"
                );
            }
        }
        Self {
            controls,
            binding,
            selected: 0,
            active_handle: 0,
            running: true,
        }
    }

    pub fn controls(&self) -> &[ControlSpec] {
        &self.controls
    }

    pub fn enabled(&self) -> bool {
        self.binding.enabled()
    }

    /// False once `Quit` has been applied.
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn is_selected(&self, control: usize) -> bool {
        self.selected == control
    }

    /// Whether `handle` of `control` is the one directional input moves.
    ///
    /// A stale handle index left over from a wider control resolves modulo
    /// the current control's handle count.
    pub fn is_handle_active(&self, control: usize, handle: usize) -> bool {
        if self.selected != control {
            return false;
        }
        match self.controls[control] {
            ControlSpec::Toggle => false,
            ControlSpec::Slider { handles } => self.active_handle % handles == handle,
        }
    }

    /// Current value of `handle` within `control`.
    pub fn value(&self, control: usize, handle: usize) -> i32 {
        self.binding.get(self.slot_base(control) + handle)
    }

    /// Apply one action. Unlisted combinations are ignored.
    pub fn apply(&mut self, action: Action) {
        let n = self.controls.len();
        match action {
            Action::Quit => self.running = false,
            Action::Up => self.selected = (self.selected + n - 1) % n,
            Action::Down => self.selected = (self.selected + 1) % n,
            Action::Confirm => {
                if self.controls[self.selected] == ControlSpec::Toggle {
                    self.binding.toggle_enabled();
                }
            }
            Action::NextTarget => {
                if let ControlSpec::Slider { handles } = self.controls[self.selected] {
                    if handles > 1 {
                        self.active_handle = (self.active_handle + 1) % handles;
                    }
                }
            }
            Action::Left => self.step_active(-1),
            Action::Right => self.step_active(1),
        }
    }

    /// First binding slot of `control`.
    fn slot_base(&self, control: usize) -> usize {
        self.controls[..control].iter().map(ControlSpec::slots).sum()
    }

    /// Move the active handle of the selected slider by `delta` steps.
    ///
    /// Truncating division snaps off-grid values onto the step grid, then the
    /// result clamps into the editable window. On a two-handle slider the
    /// sibling handle is pushed to keep `low + MIN_GAP <= high`.
    fn step_active(&mut self, delta: i32) {
        let ControlSpec::Slider { handles } = self.controls[self.selected] else {
            return;
        };
        let base = self.slot_base(self.selected);
        let handle = self.active_handle % handles;
        let slot = base + handle;

        let moved = ((self.binding.get(slot) / VALUE_STEP + delta) * VALUE_STEP)
            .clamp(VALUE_MIN, VALUE_MAX);
        self.binding.set(slot, moved);

        if handles == 2 {
            let low = self.binding.get(base);
            let high = self.binding.get(base + 1);
            if handle == 0 && high < low + MIN_GAP {
                self.binding.set(base + 1, low + MIN_GAP);
            } else if handle == 1 && low > high - MIN_GAP {
                self.binding.set(base, high - MIN_GAP);
            }
        }
    }
}
