//! Slot-addressed controllers (XInput).
//!
//! XInput exposes exactly four user slots and has no connect events, so the
//! manager polls each slot and compares it with the previous reading to
//! detect connects, disconnects and input changes worth logging.

use pads::{Button, GamepadState};

use super::normalize::{normalize_xinput_axis, normalize_xinput_trigger};

/// Number of XInput user slots.
pub const XINPUT_SLOTS: usize = 4;

/// Raw stick delta (either component) that counts as movement.
pub const STICK_LOG_THRESHOLD: i32 = 8192;

/// Raw trigger delta that counts as movement.
pub const TRIGGER_LOG_THRESHOLD: i16 = 20;

pub const DPAD_UP: u16 = 0x0001;
pub const DPAD_DOWN: u16 = 0x0002;
pub const DPAD_LEFT: u16 = 0x0004;
pub const DPAD_RIGHT: u16 = 0x0008;
pub const START: u16 = 0x0010;
pub const BACK: u16 = 0x0020;
pub const LEFT_THUMB: u16 = 0x0040;
pub const RIGHT_THUMB: u16 = 0x0080;
pub const LEFT_SHOULDER: u16 = 0x0100;
pub const RIGHT_SHOULDER: u16 = 0x0200;
pub const A: u16 = 0x1000;
pub const B: u16 = 0x2000;
pub const X: u16 = 0x4000;
pub const Y: u16 = 0x8000;

/// Button bit masks paired with their layout slot. XInput has no Guide bit.
const BUTTON_MASKS: [(u16, Button); 14] = [
    (A, Button::A),
    (B, Button::B),
    (X, Button::X),
    (Y, Button::Y),
    (LEFT_SHOULDER, Button::LeftShoulder),
    (RIGHT_SHOULDER, Button::RightShoulder),
    (BACK, Button::Back),
    (START, Button::Start),
    (LEFT_THUMB, Button::LeftStick),
    (RIGHT_THUMB, Button::RightStick),
    (DPAD_UP, Button::DPadUp),
    (DPAD_DOWN, Button::DPadDown),
    (DPAD_LEFT, Button::DPadLeft),
    (DPAD_RIGHT, Button::DPadRight),
];

/// One raw XInput gamepad reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XInputRaw {
    pub buttons: u16,
    pub left_x: i16,
    pub left_y: i16,
    pub right_x: i16,
    pub right_y: i16,
    pub left_trigger: u8,
    pub right_trigger: u8,
}

/// Reads XInput slots. `None` means nothing is plugged into the slot.
pub trait XInputSource: Send {
    fn read(&self, slot: u32) -> Option<XInputRaw>;
}

/// Convert a raw reading into the wire layout.
#[must_use]
pub fn to_gamepad_state(raw: &XInputRaw) -> GamepadState {
    let mut state = GamepadState::neutral();
    for (mask, button) in BUTTON_MASKS {
        state.buttons[button.index()] = raw.buttons & mask != 0;
    }
    state.axes = vec![
        normalize_xinput_axis(raw.left_x),
        normalize_xinput_axis(raw.left_y),
        normalize_xinput_axis(raw.right_x),
        normalize_xinput_axis(raw.right_y),
        normalize_xinput_trigger(raw.left_trigger),
        normalize_xinput_trigger(raw.right_trigger),
    ];
    state
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Input change between two readings of the same slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputChange {
    Pressed(Button),
    Released(Button),
    Stick { side: Side, x: f32, y: f32 },
    Trigger { side: Side, value: f32 },
}

/// Compare two readings and report what changed.
///
/// Sticks report when either component moved more than
/// [`STICK_LOG_THRESHOLD`] raw units; triggers when they moved more than
/// [`TRIGGER_LOG_THRESHOLD`].
#[must_use]
pub fn diff(prev: &XInputRaw, next: &XInputRaw) -> Vec<InputChange> {
    let mut changes = Vec::new();

    if prev.buttons != next.buttons {
        for (mask, button) in BUTTON_MASKS {
            let was = prev.buttons & mask != 0;
            let is = next.buttons & mask != 0;
            if was != is {
                changes.push(if is { InputChange::Pressed(button) } else { InputChange::Released(button) });
            }
        }
    }

    let moved = |a: i16, b: i16| (i32::from(b) - i32::from(a)).abs() > STICK_LOG_THRESHOLD;
    if moved(prev.left_x, next.left_x) || moved(prev.left_y, next.left_y) {
        changes.push(InputChange::Stick {
            side: Side::Left,
            x: normalize_xinput_axis(next.left_x),
            y: normalize_xinput_axis(next.left_y),
        });
    }
    if moved(prev.right_x, next.right_x) || moved(prev.right_y, next.right_y) {
        changes.push(InputChange::Stick {
            side: Side::Right,
            x: normalize_xinput_axis(next.right_x),
            y: normalize_xinput_axis(next.right_y),
        });
    }

    let pulled = |a: u8, b: u8| (i16::from(b) - i16::from(a)).abs() > TRIGGER_LOG_THRESHOLD;
    if pulled(prev.left_trigger, next.left_trigger) {
        changes.push(InputChange::Trigger { side: Side::Left, value: normalize_xinput_trigger(next.left_trigger) });
    }
    if pulled(prev.right_trigger, next.right_trigger) {
        changes.push(InputChange::Trigger { side: Side::Right, value: normalize_xinput_trigger(next.right_trigger) });
    }

    changes
}

/// Last known reading of one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XInputSlot {
    pub connected: bool,
    pub last: XInputRaw,
}

impl XInputSlot {
    /// Record whether the slot currently reports a controller. Returns `true`
    /// when this is a connect or disconnect transition.
    pub fn observe_presence(&mut self, slot: usize, present: bool) -> bool {
        if self.connected == present {
            return false;
        }
        self.connected = present;
        if present {
            tracing::info!(slot, "xinput controller connected");
        } else {
            tracing::info!(slot, "xinput controller disconnected");
            self.last = XInputRaw::default();
        }
        true
    }

    /// Store a new reading, logging changes against the previous one.
    pub fn record(&mut self, slot: usize, raw: XInputRaw) -> Vec<InputChange> {
        let changes = diff(&self.last, &raw);
        for change in &changes {
            log_change(slot, change);
        }
        self.last = raw;
        changes
    }
}

fn log_change(slot: usize, change: &InputChange) {
    match *change {
        InputChange::Pressed(button) => tracing::info!(slot, button = button.label(), "button pressed"),
        InputChange::Released(button) => tracing::info!(slot, button = button.label(), "button released"),
        InputChange::Stick { side, x, y } => {
            tracing::info!(slot, stick = side.as_str(), x = %format!("{x:.2}"), y = %format!("{y:.2}"), "stick moved");
        }
        InputChange::Trigger { side, value } => {
            tracing::info!(slot, trigger = side.as_str(), value = %format!("{value:.2}"), "trigger moved");
        }
    }
}

/// XInput via the system DLL.
///
/// The loaded handle is kept per thread, so the DLL is loaded once for each
/// runtime worker that serves a request instead of once per read. Keeping it
/// thread-local avoids relying on the handle being `Send`.
#[cfg(all(windows, feature = "xinput"))]
pub struct SystemXInput;

#[cfg(all(windows, feature = "xinput"))]
thread_local! {
    static XINPUT_HANDLE: Option<rusty_xinput::XInputHandle> = rusty_xinput::XInputHandle::load_default()
        .map_err(|e| tracing::warn!(error = ?e, "failed to load XInput on worker thread"))
        .ok();
}

#[cfg(all(windows, feature = "xinput"))]
impl SystemXInput {
    /// Probe that the XInput DLL can be loaded.
    ///
    /// # Errors
    ///
    /// Returns a description of the loading failure.
    pub fn probe() -> Result<Self, String> {
        XINPUT_HANDLE.with(|handle| if handle.is_some() { Ok(Self) } else { Err("XInput DLL not found".to_owned()) })
    }
}

#[cfg(all(windows, feature = "xinput"))]
impl XInputSource for SystemXInput {
    fn read(&self, slot: u32) -> Option<XInputRaw> {
        let state = XINPUT_HANDLE.with(|handle| handle.as_ref()?.get_state(slot).ok())?;
        let pad = state.raw.Gamepad;
        Some(XInputRaw {
            buttons: pad.wButtons,
            left_x: pad.sThumbLX,
            left_y: pad.sThumbLY,
            right_x: pad.sThumbRX,
            right_y: pad.sThumbRY,
            left_trigger: pad.bLeftTrigger,
            right_trigger: pad.bRightTrigger,
        })
    }
}

#[cfg(test)]
#[path = "xinput_test.rs"]
mod tests;
