//! Event-driven controller registry.
//!
//! DESIGN
//! ======
//! Device threads never touch this structure directly. They emit
//! [`DeviceEvent`]s through an event queue and the manager folds them in here
//! while holding its lock, so the registry is plain single-owner data.

use std::collections::BTreeMap;

use pads::{AXIS_COUNT, Axis, BUTTON_COUNT, Button, GamepadState};

use super::normalize::normalize_sdl_axis;

/// Change reported by an event-driven backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceEvent {
    Connected { instance_id: u32, name: String, vendor_id: Option<u16>, product_id: Option<u16> },
    Disconnected { instance_id: u32 },
    AxisMotion { instance_id: u32, axis: Axis, value: i16 },
    Button { instance_id: u32, button: Button, pressed: bool },
}

impl DeviceEvent {
    /// Controller the event belongs to.
    #[must_use]
    pub fn instance_id(&self) -> u32 {
        match *self {
            Self::Connected { instance_id, .. }
            | Self::Disconnected { instance_id }
            | Self::AxisMotion { instance_id, .. }
            | Self::Button { instance_id, .. } => instance_id,
        }
    }
}

/// Live data for one connected controller.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerData {
    pub name: String,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
    pub state: GamepadState,
}

/// Controllers keyed by backend instance id.
#[derive(Debug, Default)]
pub struct ControllerRegistry {
    controllers: BTreeMap<u32, ControllerData>,
}

impl ControllerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the registry.
    ///
    /// Input events for unknown instances are dropped; reconnecting an
    /// instance id resets its state.
    pub fn apply(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Connected { instance_id, name, vendor_id, product_id } => {
                tracing::info!(instance_id, %name, "controller connected");
                self.controllers.insert(
                    instance_id,
                    ControllerData {
                        name,
                        vendor_id,
                        product_id,
                        state: GamepadState {
                            buttons: vec![false; BUTTON_COUNT],
                            axes: vec![0.0; AXIS_COUNT],
                        },
                    },
                );
            }
            DeviceEvent::Disconnected { instance_id } => {
                if self.controllers.remove(&instance_id).is_some() {
                    tracing::info!(instance_id, "controller disconnected");
                }
            }
            DeviceEvent::AxisMotion { instance_id, axis, value } => {
                if let Some(data) = self.controllers.get_mut(&instance_id) {
                    if let Some(slot) = data.state.axes.get_mut(axis.index()) {
                        *slot = normalize_sdl_axis(axis, value);
                    }
                }
            }
            DeviceEvent::Button { instance_id, button, pressed } => {
                if let Some(data) = self.controllers.get_mut(&instance_id) {
                    if let Some(slot) = data.state.buttons.get_mut(button.index()) {
                        if *slot != pressed {
                            tracing::debug!(instance_id, button = button.label(), pressed, "button");
                        }
                        *slot = pressed;
                    }
                }
            }
        }
    }

    /// Connected controllers in ascending instance id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &ControllerData)> {
        self.controllers.iter().map(|(id, data)| (*id, data))
    }

    #[must_use]
    pub fn get(&self, instance_id: u32) -> Option<&ControllerData> {
        self.controllers.get(&instance_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
