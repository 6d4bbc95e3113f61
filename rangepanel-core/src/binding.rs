//! Non-owning view over the caller's settings storage.
//!
//! The binding is a pure pass-through: all writes land directly in the
//! caller's fields, and no clamping happens here. Range policy (the 5..90
//! editable window, the minimum gap between range handles) is enforced by
//! the panel controller at the moment of mutation.

/// Mutable view over one on/off flag and one or two percentage values.
///
/// The percentage slots are ordered; slider controls consume them in
/// declaration order, one slot per handle. Values live in `[0, 100]` as far
/// as the caller is concerned, although the panel only ever steps them
/// within `[5, 90]`.
pub struct SettingsBinding<'a> {
    enabled: &'a mut bool,
    slots: Vec<&'a mut i32>,
}

impl<'a> SettingsBinding<'a> {
    /// Bind to caller storage. No validation — the binding cannot fail.
    pub fn new(enabled: &'a mut bool, slots: Vec<&'a mut i32>) -> Self {
        Self { enabled, slots }
    }

    pub fn enabled(&self) -> bool {
        *self.enabled
    }

    pub fn toggle_enabled(&mut self) {
        *self.enabled = !*self.enabled;
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> i32 {
        *self.slots[slot]
    }

    pub fn set(&mut self, slot: usize, value: i32) {
        *self.slots[slot] = value;
    }
}
