use super::*;

fn connect(registry: &mut ControllerRegistry, instance_id: u32, name: &str) {
    registry.apply(DeviceEvent::Connected {
        instance_id,
        name: name.to_owned(),
        vendor_id: Some(0x054c),
        product_id: Some(0x09cc),
    });
}

#[test]
fn connect_inserts_neutral_state() {
    let mut registry = ControllerRegistry::new();
    connect(&mut registry, 7, "DualShock 4");

    let data = registry.get(7).expect("controller registered");
    assert_eq!(data.name, "DualShock 4");
    assert_eq!(data.vendor_id, Some(0x054c));
    assert_eq!(data.state, GamepadState::neutral());
}

#[test]
fn disconnect_removes_controller() {
    let mut registry = ControllerRegistry::new();
    connect(&mut registry, 1, "Pad");
    registry.apply(DeviceEvent::Disconnected { instance_id: 1 });
    assert!(registry.is_empty());
}

#[test]
fn disconnect_of_unknown_instance_is_ignored() {
    let mut registry = ControllerRegistry::new();
    connect(&mut registry, 1, "Pad");
    registry.apply(DeviceEvent::Disconnected { instance_id: 99 });
    assert_eq!(registry.len(), 1);
}

#[test]
fn button_events_toggle_slot() {
    let mut registry = ControllerRegistry::new();
    connect(&mut registry, 2, "Pad");

    registry.apply(DeviceEvent::Button { instance_id: 2, button: Button::Start, pressed: true });
    assert!(registry.get(2).unwrap().state.buttons[Button::Start.index()]);

    registry.apply(DeviceEvent::Button { instance_id: 2, button: Button::Start, pressed: false });
    assert!(!registry.get(2).unwrap().state.buttons[Button::Start.index()]);
}

#[test]
fn axis_events_are_normalised() {
    let mut registry = ControllerRegistry::new();
    connect(&mut registry, 2, "Pad");

    registry.apply(DeviceEvent::AxisMotion { instance_id: 2, axis: Axis::LeftY, value: -32767 });
    registry.apply(DeviceEvent::AxisMotion { instance_id: 2, axis: Axis::TriggerRight, value: 32767 });

    let axes = &registry.get(2).unwrap().state.axes;
    assert!((axes[Axis::LeftY.index()] - 1.0).abs() < 1e-4);
    assert!((axes[Axis::TriggerRight.index()] - 1.0).abs() < 1e-4);
}

#[test]
fn input_for_unknown_instance_is_dropped() {
    let mut registry = ControllerRegistry::new();
    registry.apply(DeviceEvent::Button { instance_id: 5, button: Button::A, pressed: true });
    registry.apply(DeviceEvent::AxisMotion { instance_id: 5, axis: Axis::LeftX, value: 100 });
    assert!(registry.is_empty());
}

#[test]
fn reconnect_resets_state() {
    let mut registry = ControllerRegistry::new();
    connect(&mut registry, 3, "Pad");
    registry.apply(DeviceEvent::Button { instance_id: 3, button: Button::A, pressed: true });
    connect(&mut registry, 3, "Pad");
    assert_eq!(registry.get(3).unwrap().state, GamepadState::neutral());
}

#[test]
fn iter_is_sorted_by_instance_id() {
    let mut registry = ControllerRegistry::new();
    connect(&mut registry, 9, "Nine");
    connect(&mut registry, 2, "Two");
    connect(&mut registry, 5, "Five");
    let ids: Vec<u32> = registry.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![2, 5, 9]);
}
