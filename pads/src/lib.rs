//! Shared gamepad model for the HTTP API.
//!
//! This crate owns the JSON representation used by `server`, `client` and
//! `cli`. Button and axis slots follow one fixed layout so every consumer can
//! index `GamepadState` vectors without negotiating a schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};


/// Number of button slots in every [`GamepadState`].
pub const BUTTON_COUNT: usize = 15;

/// Number of axis slots in every [`GamepadState`].
pub const AXIS_COUNT: usize = 6;

/// Error returned when a controller type string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown controller type: {0}")]
pub struct ParseKindError(pub String);

/// Input API a controller is read through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerKind {
    /// Slot-addressed controllers (ids 0..4).
    #[serde(rename = "xinput")]
    XInput,
    /// Event-driven controllers addressed by instance id.
    #[serde(rename = "sdl")]
    Sdl,
}

impl ControllerKind {
    /// Wire name used in URLs and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::XInput => "xinput",
            Self::Sdl => "sdl",
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControllerKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xinput" => Ok(Self::XInput),
            "sdl" => Ok(Self::Sdl),
            other => Err(ParseKindError(other.to_owned())),
        }
    }
}

/// A connected controller as listed by `GET /api/gamepads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadInfo {
    /// Slot (XInput) or instance id (SDL).
    pub id: usize,
    /// Human-readable device name.
    pub name: String,
    /// Which input API owns the device.
    pub controller_type: ControllerKind,
    /// USB vendor id, when the backend can report it.
    pub vendor_id: Option<u16>,
    /// USB product id, when the backend can report it.
    pub product_id: Option<u16>,
}

/// Snapshot of a controller's inputs.
///
/// `buttons` is indexed by [`Button::index`], `axes` by [`Axis::index`].
/// Sticks are in `-1.0..=1.0` with up/right positive, triggers in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GamepadState {
    pub buttons: Vec<bool>,
    pub axes: Vec<f32>,
}

impl GamepadState {
    /// All buttons released, all axes centred.
    #[must_use]
    pub fn neutral() -> Self {
        Self { buttons: vec![false; BUTTON_COUNT], axes: vec![0.0; AXIS_COUNT] }
    }

    /// Buttons currently held, in layout order.
    #[must_use]
    pub fn pressed(&self) -> Vec<Button> {
        Button::ALL
            .iter()
            .copied()
            .filter(|b| self.buttons.get(b.index()).copied().unwrap_or(false))
            .collect()
    }
}

impl Default for GamepadState {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Button slots, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    Back,
    Start,
    Guide,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl Button {
    pub const ALL: [Button; BUTTON_COUNT] = [
        Self::A,
        Self::B,
        Self::X,
        Self::Y,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::Back,
        Self::Start,
        Self::Guide,
        Self::LeftStick,
        Self::RightStick,
        Self::DPadUp,
        Self::DPadDown,
        Self::DPadLeft,
        Self::DPadRight,
    ];

    /// Position of this button in [`GamepadState::buttons`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
            Self::LeftShoulder => "LB",
            Self::RightShoulder => "RB",
            Self::Back => "Back",
            Self::Start => "Start",
            Self::Guide => "Guide",
            Self::LeftStick => "L3",
            Self::RightStick => "R3",
            Self::DPadUp => "DPad Up",
            Self::DPadDown => "DPad Down",
            Self::DPadLeft => "DPad Left",
            Self::DPadRight => "DPad Right",
        }
    }
}

/// Axis slots, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    TriggerLeft,
    TriggerRight,
}

impl Axis {
    pub const ALL: [Axis; AXIS_COUNT] =
        [Self::LeftX, Self::LeftY, Self::RightX, Self::RightY, Self::TriggerLeft, Self::TriggerRight];

    /// Position of this axis in [`GamepadState::axes`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Triggers are unipolar (`0.0..=1.0`); sticks are bipolar.
    #[must_use]
    pub fn is_trigger(self) -> bool {
        matches!(self, Self::TriggerLeft | Self::TriggerRight)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LeftX => "Left X",
            Self::LeftY => "Left Y",
            Self::RightX => "Right X",
            Self::RightY => "Right Y",
            Self::TriggerLeft => "LT",
            Self::TriggerRight => "RT",
        }
    }
}
