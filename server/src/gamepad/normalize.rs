//! Raw device values to the normalised ranges used on the wire.
//!
//! Sticks map to `-1.0..=1.0` with up and right positive, triggers map to
//! `0.0..=1.0`. SDL reports Y axes pointing down; XInput already reports up
//! as positive.

use pads::Axis;

const SDL_AXIS_MAX: f32 = 32767.0;
const XINPUT_AXIS_RANGE: f32 = 32768.0;
const XINPUT_TRIGGER_MAX: f32 = 255.0;

/// Normalise an SDL game controller axis reading.
#[must_use]
pub fn normalize_sdl_axis(axis: Axis, raw: i16) -> f32 {
    let scaled = f32::from(raw) / SDL_AXIS_MAX;
    match axis {
        Axis::LeftY | Axis::RightY => -scaled,
        _ => scaled,
    }
}

/// Normalise an XInput thumbstick reading.
#[must_use]
pub fn normalize_xinput_axis(raw: i16) -> f32 {
    f32::from(raw) / XINPUT_AXIS_RANGE
}

/// Normalise an XInput trigger reading.
#[must_use]
pub fn normalize_xinput_trigger(raw: u8) -> f32 {
    f32::from(raw) / XINPUT_TRIGGER_MAX
}

/// Extract vendor and product ids from a joystick GUID string.
///
/// Characters `8..12` hold the vendor id and `12..16` the product id, both
/// as hex. Each half is `None` when missing or malformed.
#[must_use]
pub fn parse_guid_ids(guid: &str) -> (Option<u16>, Option<u16>) {
    let hex = |range: std::ops::Range<usize>| guid.get(range).and_then(|s| u16::from_str_radix(s, 16).ok());
    (hex(8..12), hex(12..16))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
