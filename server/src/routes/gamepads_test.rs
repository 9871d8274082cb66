use super::*;
use crate::gamepad::DeviceEvent;
use crate::state::test_helpers::{connected, test_app_state};
use pads::Button;

#[tokio::test]
async fn list_gamepads_is_empty_without_devices() {
    let (state, _tx) = test_app_state();
    let Json(list) = list_gamepads(State(state)).await;
    assert!(list.is_empty());
}

#[tokio::test]
async fn list_gamepads_reports_connected_devices() {
    let (state, tx) = test_app_state();
    tx.send(connected(11, "DualSense")).unwrap();
    tx.send(connected(3, "Switch Pro")).unwrap();

    let Json(list) = list_gamepads(State(state)).await;
    let ids: Vec<usize> = list.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![3, 11]);
    assert_eq!(list[1].name, "DualSense");
    assert_eq!(list[1].controller_type, ControllerKind::Sdl);
}

#[tokio::test]
async fn gamepad_state_returns_live_buttons() {
    let (state, tx) = test_app_state();
    tx.send(connected(1, "Pad")).unwrap();
    tx.send(DeviceEvent::Button { instance_id: 1, button: Button::B, pressed: true }).unwrap();

    let Json(pad) = gamepad_state(State(state), Path(("sdl".to_owned(), 1))).await.unwrap();
    assert_eq!(pad.pressed(), vec![Button::B]);
    assert_eq!(pad.axes.len(), pads::AXIS_COUNT);
}

#[tokio::test]
async fn gamepad_state_unknown_id_is_not_found() {
    let (state, _tx) = test_app_state();
    let err = gamepad_state(State(state), Path(("sdl".to_owned(), 42))).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn gamepad_state_xinput_without_backend_is_not_found() {
    let (state, _tx) = test_app_state();
    let err = gamepad_state(State(state), Path(("xinput".to_owned(), 0))).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn gamepad_state_unknown_type_is_bad_request() {
    let (state, _tx) = test_app_state();
    let err = gamepad_state(State(state), Path(("dinput".to_owned(), 0))).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}
