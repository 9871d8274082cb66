//! Gamepad listing and state routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use pads::{ControllerKind, GamepadInfo, GamepadState};

use crate::state::AppState;

/// `GET /api/gamepads` — every connected controller.
pub async fn list_gamepads(State(state): State<AppState>) -> Json<Vec<GamepadInfo>> {
    let mut manager = state.gamepads.lock().await;
    Json(manager.gamepads())
}

/// `GET /api/gamepads/{controller_type}/{id}` — live state of one controller.
///
/// `400` for an unknown controller type, `404` when nothing is connected
/// under that id.
pub async fn gamepad_state(
    State(state): State<AppState>,
    Path((controller_type, id)): Path<(String, usize)>,
) -> Result<Json<GamepadState>, StatusCode> {
    let kind = controller_type.parse::<ControllerKind>().map_err(|e| {
        tracing::debug!(error = %e, "rejected gamepad state request");
        StatusCode::BAD_REQUEST
    })?;

    let mut manager = state.gamepads.lock().await;
    manager.gamepad_state(kind, id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "gamepads_test.rs"]
mod tests;
