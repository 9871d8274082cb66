//! Controller manager: merges every input backend into one gamepad list.
//!
//! DESIGN
//! ======
//! Two kinds of backend feed the manager:
//! - event-driven devices (SDL) run on their own thread and send
//!   [`DeviceEvent`]s through a coalescing [`queue`], folded into a
//!   [`ControllerRegistry`] on every poll;
//! - slot-based devices (XInput) are read synchronously through an
//!   [`XInputSource`] when a request asks for them.
//!
//! Requests poll before answering, so there is no background ticker.

pub mod normalize;
pub mod queue;
pub mod registry;
#[cfg(feature = "sdl")]
pub mod sdl;
pub mod xinput;

use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use pads::{ControllerKind, GamepadInfo, GamepadState};

pub use queue::{EventReceiver, EventSender, event_queue};
pub use registry::{ControllerRegistry, DeviceEvent};
use xinput::{XINPUT_SLOTS, XInputSlot, XInputSource, to_gamepad_state};

/// Default wall-clock budget for draining device events in one poll.
pub const DEFAULT_POLL_BUDGET: Duration = Duration::from_micros(50);

/// Owns every controller backend and the derived controller state.
pub struct ControllerManager {
    events: Option<EventReceiver>,
    registry: ControllerRegistry,
    xinput: Option<Box<dyn XInputSource>>,
    xinput_slots: [XInputSlot; XINPUT_SLOTS],
    poll_budget: Duration,
}

impl ControllerManager {
    /// Manager with no backends; lists nothing until one is attached.
    #[must_use]
    pub fn new(poll_budget: Duration) -> Self {
        Self {
            events: None,
            registry: ControllerRegistry::new(),
            xinput: None,
            xinput_slots: [XInputSlot::default(); XINPUT_SLOTS],
            poll_budget,
        }
    }

    /// Attach the receiving end of an event-driven backend.
    #[must_use]
    pub fn with_events(mut self, events: EventReceiver) -> Self {
        self.events = Some(events);
        self
    }

    /// Attach a slot-based backend.
    #[must_use]
    pub fn with_xinput(mut self, source: Box<dyn XInputSource>) -> Self {
        self.xinput = Some(source);
        self
    }

    /// Drain pending device events into the registry.
    ///
    /// At least one event is taken per call; draining stops when the queue
    /// is empty or the poll budget is spent. The queue coalesces, so events
    /// left for the next poll are still the latest values. A queue whose
    /// sender is gone detaches the backend.
    pub fn poll(&mut self) {
        let Some(events) = &self.events else {
            return;
        };

        let start = Instant::now();
        let mut applied = 0usize;
        let mut detached = false;
        loop {
            match events.try_recv() {
                Ok(event) => {
                    self.registry.apply(event);
                    applied += 1;
                    if start.elapsed() >= self.poll_budget {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    detached = true;
                    break;
                }
            }
        }

        if applied > 0 {
            tracing::trace!(applied, "device events applied");
        }
        if detached {
            tracing::warn!("device event backend stopped");
            self.events = None;
        }
    }

    /// Every connected controller: XInput slots first, then event-driven
    /// controllers by instance id.
    pub fn gamepads(&mut self) -> Vec<GamepadInfo> {
        self.poll();

        let mut list = Vec::new();
        if let Some(source) = &self.xinput {
            for (slot, tracked) in self.xinput_slots.iter_mut().enumerate() {
                let present = read_slot(source.as_ref(), slot).is_some();
                tracked.observe_presence(slot, present);
                if present {
                    list.push(GamepadInfo {
                        id: slot,
                        name: format!("Xbox Controller {}", slot + 1),
                        controller_type: ControllerKind::XInput,
                        vendor_id: None,
                        product_id: None,
                    });
                }
            }
        }

        list.extend(self.registry.iter().map(|(instance_id, data)| GamepadInfo {
            id: instance_id as usize,
            name: data.name.clone(),
            controller_type: ControllerKind::Sdl,
            vendor_id: data.vendor_id,
            product_id: data.product_id,
        }));
        list
    }

    /// Current state of one controller, or `None` if it is not connected.
    pub fn gamepad_state(&mut self, kind: ControllerKind, id: usize) -> Option<GamepadState> {
        self.poll();

        match kind {
            ControllerKind::XInput => {
                let source = self.xinput.as_ref()?;
                let tracked = self.xinput_slots.get_mut(id)?;
                let raw = read_slot(source.as_ref(), id);
                tracked.observe_presence(id, raw.is_some());
                let raw = raw?;
                tracked.record(id, raw);
                Some(to_gamepad_state(&raw))
            }
            ControllerKind::Sdl => {
                let instance_id = u32::try_from(id).ok()?;
                self.registry.get(instance_id).map(|data| data.state.clone())
            }
        }
    }
}

fn read_slot(source: &dyn XInputSource, slot: usize) -> Option<xinput::XInputRaw> {
    source.read(u32::try_from(slot).ok()?)
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
