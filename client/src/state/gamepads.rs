//! Controller list and live-state model for the main view.
//!
//! DESIGN
//! ======
//! Polling responses can arrive after the user switched controllers, so
//! state updates are keyed and dropped unless they match the selection.

#[cfg(test)]
#[path = "gamepads_test.rs"]
mod gamepads_test;

use pads::{ControllerKind, GamepadInfo, GamepadState};

/// Identity of one controller across list refreshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PadKey {
    pub kind: ControllerKind,
    pub id: usize,
}

impl PadKey {
    #[must_use]
    pub fn of(info: &GamepadInfo) -> Self {
        Self { kind: info.controller_type, id: info.id }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GamepadsState {
    pub pads: Vec<GamepadInfo>,
    pub selected: Option<PadKey>,
    pub current: Option<GamepadState>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GamepadsState {
    /// Replace the controller list.
    ///
    /// The selection survives if its controller is still listed; otherwise
    /// the first controller is selected, or nothing when the list is empty.
    pub fn apply_list(&mut self, pads: Vec<GamepadInfo>) {
        self.loading = false;
        self.pads = pads;

        let still_listed = self.selected.is_some_and(|key| self.contains(key));
        if !still_listed {
            self.selected = self.pads.first().map(PadKey::of);
            self.current = None;
        }
    }

    /// Select a listed controller. Unlisted keys are ignored.
    pub fn select(&mut self, key: PadKey) {
        if self.selected == Some(key) || !self.contains(key) {
            return;
        }
        self.selected = Some(key);
        self.current = None;
    }

    /// Store a polled state if it belongs to the current selection.
    ///
    /// `None` means the controller vanished between list refreshes.
    pub fn apply_state(&mut self, key: PadKey, state: Option<GamepadState>) {
        if self.selected == Some(key) {
            self.current = state;
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    #[must_use]
    pub fn contains(&self, key: PadKey) -> bool {
        self.pads.iter().any(|p| PadKey::of(p) == key)
    }

    #[must_use]
    pub fn selected_info(&self) -> Option<&GamepadInfo> {
        let key = self.selected?;
        self.pads.iter().find(|p| PadKey::of(p) == key)
    }
}
