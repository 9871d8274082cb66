//! SDL2 game controller backend.
//!
//! SDL handles are neither `Send` nor `Sync`, so the SDL context lives on a
//! dedicated thread for its whole life. The thread pumps SDL events, samples
//! every open controller after each drain and forwards what changed as
//! [`DeviceEvent`]s through a coalescing queue, so a backlog never builds up
//! while no request drains it. Dropping the receiver stops the thread.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use pads::{AXIS_COUNT, Axis, BUTTON_COUNT, Button};
use sdl2::controller::{Axis as SdlAxis, Button as SdlButton, GameController};
use sdl2::event::Event;

use super::normalize::parse_guid_ids;
use super::queue::{EventReceiver, EventSender, event_queue};
use super::registry::DeviceEvent;

/// Delay between two pump/sample passes.
pub const DEFAULT_TICK: Duration = Duration::from_millis(8);

#[derive(Debug, thiserror::Error)]
pub enum SdlError {
    #[error("SDL init failed: {0}")]
    Init(String),
    #[error("failed to spawn SDL thread: {0}")]
    Thread(#[from] std::io::Error),
    #[error("SDL thread exited before reporting readiness")]
    NotReady,
}

/// Start the SDL thread and return the event stream it feeds.
///
/// # Errors
///
/// Returns an error if SDL or its game controller subsystem fails to start.
pub fn spawn(mappings_file: Option<PathBuf>, tick: Duration) -> Result<EventReceiver, SdlError> {
    let (tx, rx) = event_queue();
    let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), SdlError>>(1);

    std::thread::Builder::new().name("sdl-gamepads".into()).spawn(move || {
        match SdlDevices::open(mappings_file.as_deref()) {
            Ok(mut devices) => {
                let _ = ready_tx.send(Ok(()));
                devices.run(&tx, tick);
            }
            Err(e) => {
                let _ = ready_tx.send(Err(e));
            }
        }
    })?;

    ready_rx.recv().map_err(|_| SdlError::NotReady)??;
    Ok(rx)
}

struct OpenController {
    controller: GameController,
    axes: [i16; AXIS_COUNT],
    buttons: [bool; BUTTON_COUNT],
}

struct SdlDevices {
    _context: sdl2::Sdl,
    joysticks: sdl2::JoystickSubsystem,
    controllers: sdl2::GameControllerSubsystem,
    pump: sdl2::EventPump,
    open: Vec<OpenController>,
    pending: Vec<DeviceEvent>,
}

impl SdlDevices {
    fn open(mappings_file: Option<&Path>) -> Result<Self, SdlError> {
        let context = sdl2::init().map_err(SdlError::Init)?;
        let joysticks = context.joystick().map_err(SdlError::Init)?;
        let controllers = context.game_controller().map_err(SdlError::Init)?;
        controllers.set_event_state(true);
        let pump = context.event_pump().map_err(SdlError::Init)?;

        if let Some(path) = mappings_file {
            match controllers.load_mappings(path) {
                Ok(count) => tracing::info!(count, path = %path.display(), "loaded SDL controller mappings"),
                Err(e) => tracing::warn!(error = %e, path = %path.display(), "failed to load SDL controller mappings"),
            }
        }

        let mut devices = Self { _context: context, joysticks, controllers, pump, open: Vec::new(), pending: Vec::new() };

        let available = devices.joysticks.num_joysticks().unwrap_or(0);
        tracing::info!(available, "SDL joystick devices found");
        for index in 0..available {
            devices.open_index(index);
        }
        Ok(devices)
    }

    fn run(&mut self, tx: &EventSender, tick: Duration) {
        loop {
            let events: Vec<Event> = self.pump.poll_iter().collect();
            for event in events {
                self.handle(event);
            }
            self.sample();

            for event in self.pending.drain(..) {
                if tx.send(event).is_err() {
                    tracing::debug!("device event receiver dropped, stopping SDL thread");
                    return;
                }
            }
            std::thread::sleep(tick);
        }
    }

    fn handle(&mut self, event: Event) {
        match event {
            Event::ControllerDeviceAdded { which, .. } => self.open_index(which),
            Event::ControllerDeviceRemoved { which, .. } => {
                let before = self.open.len();
                self.open.retain(|c| c.controller.instance_id() != which);
                if self.open.len() != before {
                    self.pending.push(DeviceEvent::Disconnected { instance_id: which });
                }
            }
            Event::ControllerAxisMotion { which, axis, value, .. } => {
                let axis = from_sdl_axis(axis);
                if let Some(open) = self.open.iter_mut().find(|c| c.controller.instance_id() == which) {
                    open.axes[axis.index()] = value;
                    self.pending.push(DeviceEvent::AxisMotion { instance_id: which, axis, value });
                }
            }
            Event::ControllerButtonDown { which, button, .. } => self.button(which, button, true),
            Event::ControllerButtonUp { which, button, .. } => self.button(which, button, false),
            _ => {}
        }
    }

    fn button(&mut self, instance_id: u32, button: SdlButton, pressed: bool) {
        let Some(button) = from_sdl_button(button) else {
            return;
        };
        if let Some(open) = self.open.iter_mut().find(|c| c.controller.instance_id() == instance_id) {
            open.buttons[button.index()] = pressed;
            self.pending.push(DeviceEvent::Button { instance_id, button, pressed });
        }
    }

    fn is_open(&self, instance_id: u32) -> bool {
        self.open.iter().any(|c| c.controller.instance_id() == instance_id)
    }

    /// Open the device at joystick `index` if it is a game controller not
    /// already open.
    fn open_index(&mut self, index: u32) {
        if !self.controllers.is_game_controller(index) {
            tracing::debug!(index, "joystick is not a game controller");
            return;
        }
        let controller = match self.controllers.open(index) {
            Ok(controller) => controller,
            Err(e) => {
                tracing::warn!(index, error = %e, "failed to open game controller");
                return;
            }
        };

        let instance_id = controller.instance_id();
        if self.is_open(instance_id) {
            return;
        }

        let (vendor_id, product_id) = self
            .joysticks
            .device_guid(index)
            .map(|guid| parse_guid_ids(&guid.to_string()))
            .unwrap_or((None, None));
        let name = controller.name();
        tracing::info!(instance_id, %name, mapping = %controller.mapping(), "opened game controller");

        self.pending.push(DeviceEvent::Connected { instance_id, name, vendor_id, product_id });
        self.open.push(OpenController { controller, axes: [0; AXIS_COUNT], buttons: [false; BUTTON_COUNT] });
    }

    /// Read every open controller and queue values that changed since the
    /// last report.
    fn sample(&mut self) {
        for open in &mut self.open {
            let instance_id = open.controller.instance_id();
            for axis in Axis::ALL {
                let value = open.controller.axis(to_sdl_axis(axis));
                if open.axes[axis.index()] != value {
                    open.axes[axis.index()] = value;
                    self.pending.push(DeviceEvent::AxisMotion { instance_id, axis, value });
                }
            }
            for button in Button::ALL {
                let pressed = open.controller.button(to_sdl_button(button));
                if open.buttons[button.index()] != pressed {
                    open.buttons[button.index()] = pressed;
                    self.pending.push(DeviceEvent::Button { instance_id, button, pressed });
                }
            }
        }
    }
}

fn from_sdl_axis(axis: SdlAxis) -> Axis {
    match axis {
        SdlAxis::LeftX => Axis::LeftX,
        SdlAxis::LeftY => Axis::LeftY,
        SdlAxis::RightX => Axis::RightX,
        SdlAxis::RightY => Axis::RightY,
        SdlAxis::TriggerLeft => Axis::TriggerLeft,
        SdlAxis::TriggerRight => Axis::TriggerRight,
    }
}

fn to_sdl_axis(axis: Axis) -> SdlAxis {
    match axis {
        Axis::LeftX => SdlAxis::LeftX,
        Axis::LeftY => SdlAxis::LeftY,
        Axis::RightX => SdlAxis::RightX,
        Axis::RightY => SdlAxis::RightY,
        Axis::TriggerLeft => SdlAxis::TriggerLeft,
        Axis::TriggerRight => SdlAxis::TriggerRight,
    }
}

/// Buttons outside the 15-slot layout (paddles, touchpad, misc) map to `None`.
fn from_sdl_button(button: SdlButton) -> Option<Button> {
    Some(match button {
        SdlButton::A => Button::A,
        SdlButton::B => Button::B,
        SdlButton::X => Button::X,
        SdlButton::Y => Button::Y,
        SdlButton::LeftShoulder => Button::LeftShoulder,
        SdlButton::RightShoulder => Button::RightShoulder,
        SdlButton::Back => Button::Back,
        SdlButton::Start => Button::Start,
        SdlButton::Guide => Button::Guide,
        SdlButton::LeftStick => Button::LeftStick,
        SdlButton::RightStick => Button::RightStick,
        SdlButton::DPadUp => Button::DPadUp,
        SdlButton::DPadDown => Button::DPadDown,
        SdlButton::DPadLeft => Button::DPadLeft,
        SdlButton::DPadRight => Button::DPadRight,
        _ => return None,
    })
}

fn to_sdl_button(button: Button) -> SdlButton {
    match button {
        Button::A => SdlButton::A,
        Button::B => SdlButton::B,
        Button::X => SdlButton::X,
        Button::Y => SdlButton::Y,
        Button::LeftShoulder => SdlButton::LeftShoulder,
        Button::RightShoulder => SdlButton::RightShoulder,
        Button::Back => SdlButton::Back,
        Button::Start => SdlButton::Start,
        Button::Guide => SdlButton::Guide,
        Button::LeftStick => SdlButton::LeftStick,
        Button::RightStick => SdlButton::RightStick,
        Button::DPadUp => SdlButton::DPadUp,
        Button::DPadDown => SdlButton::DPadDown,
        Button::DPadLeft => SdlButton::DPadLeft,
        Button::DPadRight => SdlButton::DPadRight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_buttons_round_trip_through_sdl() {
        for button in Button::ALL {
            assert_eq!(from_sdl_button(to_sdl_button(button)), Some(button));
        }
    }

    #[test]
    fn extra_sdl_buttons_are_outside_layout() {
        assert_eq!(from_sdl_button(SdlButton::Touchpad), None);
        assert_eq!(from_sdl_button(SdlButton::Paddle1), None);
    }

    #[test]
    fn layout_axes_round_trip_through_sdl() {
        for axis in Axis::ALL {
            assert_eq!(from_sdl_axis(to_sdl_axis(axis)), axis);
        }
    }
}
