//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! controller manager is single-owner data behind an async mutex; every
//! request takes the lock, polls the backends and answers from the result.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::gamepad::ControllerManager;

/// Clone is required by Axum; the manager is shared through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub gamepads: Arc<Mutex<ControllerManager>>,
}

impl AppState {
    #[must_use]
    pub fn new(manager: ControllerManager) -> Self {
        Self { gamepads: Arc::new(Mutex::new(manager)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
