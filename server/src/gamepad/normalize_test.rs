use super::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn sdl_x_axes_keep_sign() {
    assert!(approx(normalize_sdl_axis(Axis::LeftX, 32767), 1.0));
    assert!(approx(normalize_sdl_axis(Axis::RightX, -32767), -1.0));
    assert!(approx(normalize_sdl_axis(Axis::LeftX, 0), 0.0));
}

#[test]
fn sdl_y_axes_are_inverted_so_up_is_positive() {
    assert!(approx(normalize_sdl_axis(Axis::LeftY, -32767), 1.0));
    assert!(approx(normalize_sdl_axis(Axis::RightY, 32767), -1.0));
}

#[test]
fn sdl_triggers_scale_to_unit_range() {
    assert!(approx(normalize_sdl_axis(Axis::TriggerLeft, 0), 0.0));
    assert!(approx(normalize_sdl_axis(Axis::TriggerRight, 32767), 1.0));
}

#[test]
fn xinput_axis_uses_full_signed_range() {
    assert!(approx(normalize_xinput_axis(i16::MIN), -1.0));
    assert!(approx(normalize_xinput_axis(16384), 0.5));
    assert!(normalize_xinput_axis(i16::MAX) < 1.0);
}

#[test]
fn xinput_trigger_scales_to_unit_range() {
    assert!(approx(normalize_xinput_trigger(0), 0.0));
    assert!(approx(normalize_xinput_trigger(255), 1.0));
    assert!(approx(normalize_xinput_trigger(51), 0.2));
}

#[test]
fn guid_ids_parse_from_hex_slices() {
    let (vid, pid) = parse_guid_ids("030000005e0400008e02000000007200");
    assert_eq!(vid, Some(0x5e04));
    assert_eq!(pid, Some(0x0000));
}

#[test]
fn guid_ids_are_none_when_too_short() {
    assert_eq!(parse_guid_ids("0300"), (None, None));
    assert_eq!(parse_guid_ids("030000004c05"), (Some(0x4c05), None));
}

#[test]
fn guid_ids_are_none_for_non_hex() {
    assert_eq!(parse_guid_ids("00000000zzzz1234"), (None, Some(0x1234)));
}
