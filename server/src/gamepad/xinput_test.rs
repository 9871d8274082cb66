use super::*;

#[test]
fn gamepad_state_maps_bits_to_layout() {
    let raw = XInputRaw { buttons: A | DPAD_RIGHT | LEFT_THUMB, ..XInputRaw::default() };
    let state = to_gamepad_state(&raw);
    assert_eq!(state.pressed(), vec![Button::A, Button::LeftStick, Button::DPadRight]);
}

#[test]
fn gamepad_state_never_reports_guide() {
    let raw = XInputRaw { buttons: u16::MAX, ..XInputRaw::default() };
    let state = to_gamepad_state(&raw);
    assert!(!state.buttons[Button::Guide.index()]);
    assert_eq!(state.pressed().len(), 14);
}

#[test]
fn gamepad_state_axes_keep_xinput_orientation() {
    let raw = XInputRaw {
        left_y: 16384,
        right_x: -16384,
        right_trigger: 255,
        ..XInputRaw::default()
    };
    let state = to_gamepad_state(&raw);
    assert_eq!(state.axes.len(), 6);
    assert!((state.axes[1] - 0.5).abs() < 1e-4);
    assert!((state.axes[2] + 0.5).abs() < 1e-4);
    assert!((state.axes[5] - 1.0).abs() < 1e-4);
}

#[test]
fn diff_reports_press_and_release() {
    let prev = XInputRaw { buttons: B, ..XInputRaw::default() };
    let next = XInputRaw { buttons: A, ..XInputRaw::default() };
    assert_eq!(diff(&prev, &next), vec![InputChange::Pressed(Button::A), InputChange::Released(Button::B)]);
}

#[test]
fn diff_ignores_small_stick_motion() {
    let prev = XInputRaw::default();
    let next = XInputRaw { left_x: 8192, right_y: -8000, ..XInputRaw::default() };
    assert!(diff(&prev, &next).is_empty());
}

#[test]
fn diff_reports_large_stick_motion_once_per_stick() {
    let prev = XInputRaw::default();
    let next = XInputRaw { left_x: 9000, left_y: -9000, ..XInputRaw::default() };
    let changes = diff(&prev, &next);
    assert_eq!(changes.len(), 1);
    assert!(matches!(changes[0], InputChange::Stick { side: Side::Left, .. }));
}

#[test]
fn diff_handles_full_stick_swing_without_overflow() {
    let prev = XInputRaw { right_x: i16::MIN, ..XInputRaw::default() };
    let next = XInputRaw { right_x: i16::MAX, ..XInputRaw::default() };
    let changes = diff(&prev, &next);
    assert!(matches!(changes[0], InputChange::Stick { side: Side::Right, .. }));
}

#[test]
fn diff_trigger_threshold_is_exclusive() {
    let prev = XInputRaw::default();
    assert!(diff(&prev, &XInputRaw { left_trigger: 20, ..XInputRaw::default() }).is_empty());
    let changes = diff(&prev, &XInputRaw { right_trigger: 21, ..XInputRaw::default() });
    assert_eq!(changes.len(), 1);
    assert!(matches!(changes[0], InputChange::Trigger { side: Side::Right, .. }));
}

#[test]
fn slot_presence_reports_transitions_only() {
    let mut slot = XInputSlot::default();
    assert!(slot.observe_presence(0, true));
    assert!(!slot.observe_presence(0, true));
    assert!(slot.observe_presence(0, false));
    assert!(!slot.observe_presence(0, false));
}

#[test]
fn slot_disconnect_clears_last_reading() {
    let mut slot = XInputSlot::default();
    slot.observe_presence(1, true);
    slot.record(1, XInputRaw { buttons: A, ..XInputRaw::default() });
    slot.observe_presence(1, false);
    assert_eq!(slot.last, XInputRaw::default());
}

#[test]
fn slot_record_diffs_against_previous_reading() {
    let mut slot = XInputSlot::default();
    let pressed = XInputRaw { buttons: START, ..XInputRaw::default() };
    assert_eq!(slot.record(2, pressed), vec![InputChange::Pressed(Button::Start)]);
    assert!(slot.record(2, pressed).is_empty());
    assert_eq!(slot.last, pressed);
}

#[cfg(all(windows, feature = "xinput"))]
#[test]
fn system_source_reuses_handle_across_reads() {
    let Ok(source) = SystemXInput::probe() else {
        return;
    };
    for _ in 0..100 {
        for slot in 0..XINPUT_SLOTS as u32 {
            let _ = source.read(slot);
        }
    }
    assert!(source.read(XINPUT_SLOTS as u32).is_none());
}
