use super::*;
use pads::{ControllerKind, GamepadInfo};

#[test]
fn axis_percent_centres_sticks() {
    assert!((axis_percent(0.0, Axis::LeftX) - 50.0).abs() < f32::EPSILON);
    assert!((axis_percent(-1.0, Axis::RightY) - 0.0).abs() < f32::EPSILON);
    assert!((axis_percent(1.0, Axis::LeftY) - 100.0).abs() < f32::EPSILON);
}

#[test]
fn axis_percent_scales_triggers_from_zero() {
    assert!((axis_percent(0.0, Axis::TriggerLeft) - 0.0).abs() < f32::EPSILON);
    assert!((axis_percent(0.5, Axis::TriggerRight) - 50.0).abs() < f32::EPSILON);
}

#[test]
fn axis_percent_clamps_out_of_range_values() {
    assert!((axis_percent(3.0, Axis::LeftX) - 100.0).abs() < f32::EPSILON);
    assert!((axis_percent(-0.4, Axis::TriggerLeft) - 0.0).abs() < f32::EPSILON);
    assert!((axis_percent(f32::NAN, Axis::LeftX) - 50.0).abs() < f32::EPSILON);
}

#[test]
fn button_class_marks_pressed() {
    assert_eq!(button_class(false), "pad-button");
    assert_eq!(button_class(true), "pad-button pad-button--pressed");
}

#[test]
fn format_vid_pid_pads_hex() {
    let mut info = GamepadInfo {
        id: 3,
        name: "Wireless Controller".to_owned(),
        controller_type: ControllerKind::Sdl,
        vendor_id: Some(0x054c),
        product_id: Some(0x0ce6),
    };
    assert_eq!(format_vid_pid(&info).as_deref(), Some("054C:0CE6"));

    info.product_id = None;
    assert_eq!(format_vid_pid(&info), None);
}

#[test]
fn short_state_vectors_read_as_neutral() {
    let state = GamepadState { buttons: vec![true], axes: Vec::new() };
    assert!(is_pressed(&state, Button::A));
    assert!(!is_pressed(&state, Button::DPadRight));
    assert!(axis_value(&state, Axis::TriggerRight).abs() < f32::EPSILON);
}
