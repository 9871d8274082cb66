//! Coalescing event queue between a device thread and the manager.
//!
//! DESIGN
//! ======
//! Device threads produce input changes continuously, but the manager only
//! drains when a request arrives. Motion and button events for the same
//! input replace the queued value instead of stacking up, and a connect or
//! disconnect discards everything still queued for that instance. The queue
//! therefore holds at most one entry per input per controller, and whatever
//! the manager drains is the latest known value.

use std::collections::VecDeque;
use std::sync::mpsc::TryRecvError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::registry::DeviceEvent;

#[cfg(test)]
#[path = "queue_test.rs"]
mod tests;

/// The receiving side was dropped; the device thread should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("device event receiver dropped")]
pub struct ReceiverGone;

#[derive(Debug, Default)]
struct Shared {
    events: VecDeque<DeviceEvent>,
    sender_gone: bool,
}

impl Shared {
    fn push(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Connected { instance_id, .. } | DeviceEvent::Disconnected { instance_id } => {
                self.events.retain(|queued| queued.instance_id() != instance_id);
            }
            DeviceEvent::AxisMotion { .. } | DeviceEvent::Button { .. } => {
                if let Some(queued) = self.events.iter_mut().find(|queued| same_input(queued, &event)) {
                    *queued = event;
                    return;
                }
            }
        }
        self.events.push_back(event);
    }
}

fn same_input(a: &DeviceEvent, b: &DeviceEvent) -> bool {
    match (a, b) {
        (
            DeviceEvent::AxisMotion { instance_id: a_id, axis: a_axis, .. },
            DeviceEvent::AxisMotion { instance_id: b_id, axis: b_axis, .. },
        ) => a_id == b_id && a_axis == b_axis,
        (
            DeviceEvent::Button { instance_id: a_id, button: a_button, .. },
            DeviceEvent::Button { instance_id: b_id, button: b_button, .. },
        ) => a_id == b_id && a_button == b_button,
        _ => false,
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Producer half, owned by a device thread.
#[derive(Debug)]
pub struct EventSender {
    shared: Arc<Mutex<Shared>>,
}

/// Consumer half, owned by the [`ControllerManager`](super::ControllerManager).
#[derive(Debug)]
pub struct EventReceiver {
    shared: Arc<Mutex<Shared>>,
}

/// Create a connected sender/receiver pair.
#[must_use]
pub fn event_queue() -> (EventSender, EventReceiver) {
    let shared = Arc::new(Mutex::new(Shared::default()));
    (EventSender { shared: Arc::clone(&shared) }, EventReceiver { shared })
}

impl EventSender {
    /// Queue an event, coalescing it with anything still pending.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiverGone`] once the receiver has been dropped.
    pub fn send(&self, event: DeviceEvent) -> Result<(), ReceiverGone> {
        if Arc::strong_count(&self.shared) < 2 {
            return Err(ReceiverGone);
        }
        lock(&self.shared).push(event);
        Ok(())
    }
}

impl Drop for EventSender {
    fn drop(&mut self) {
        lock(&self.shared).sender_gone = true;
    }
}

impl EventReceiver {
    /// Take the oldest pending event.
    ///
    /// # Errors
    ///
    /// [`TryRecvError::Empty`] when nothing is queued,
    /// [`TryRecvError::Disconnected`] when the queue is drained and the
    /// sender is gone.
    pub fn try_recv(&self) -> Result<DeviceEvent, TryRecvError> {
        let mut shared = lock(&self.shared);
        match shared.events.pop_front() {
            Some(event) => Ok(event),
            None if shared.sender_gone => Err(TryRecvError::Disconnected),
            None => Err(TryRecvError::Empty),
        }
    }

    /// Number of events waiting to be drained.
    #[must_use]
    pub fn pending(&self) -> usize {
        lock(&self.shared).events.len()
    }
}
