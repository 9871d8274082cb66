//! REST API helpers for the gamepad endpoints.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: stubs returning an error, since these endpoints
//! are only reachable from the page the server hosts.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display strings so polling loops can surface them in
//! the status line and keep running.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use pads::{ControllerKind, GamepadInfo, GamepadState};

#[cfg(any(test, feature = "csr"))]
fn gamepads_endpoint() -> &'static str {
    "/api/gamepads"
}

#[cfg(any(test, feature = "csr"))]
fn gamepad_state_endpoint(kind: ControllerKind, id: usize) -> String {
    format!("/api/gamepads/{kind}/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn list_failed_message(status: u16) -> String {
    format!("list request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn state_failed_message(status: u16) -> String {
    format!("state request failed: {status}")
}

/// Fetch all connected controllers from `/api/gamepads`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_gamepads() -> Result<Vec<GamepadInfo>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(gamepads_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<Vec<GamepadInfo>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch one controller's state from `/api/gamepads/{kind}/{id}`.
///
/// `Ok(None)` means the server no longer knows the controller.
///
/// # Errors
///
/// Returns an error string for transport failures and non-404 error statuses.
pub async fn fetch_gamepad_state(kind: ControllerKind, id: usize) -> Result<Option<GamepadState>, String> {
    #[cfg(feature = "csr")]
    {
        let url = gamepad_state_endpoint(kind, id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(state_failed_message(resp.status()));
        }
        resp.json::<GamepadState>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (kind, id);
        Err("not available outside the browser".to_owned())
    }
}
