//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON API routes live under `/api`. Everything else is the built client:
//! static files from the configured directory, with `index.html` as the
//! fallback so the single-page app owns every other path.

pub mod gamepads;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/gamepads", get(gamepads::list_gamepads))
        .route("/api/gamepads/{controller_type}/{id}", get(gamepads::gamepad_state))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API plus the static single-page client.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    api_routes(state)
        .fallback_service(spa)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::state::test_helpers::{connected, test_app_state};

    fn test_router() -> (Router, crate::gamepad::EventSender) {
        let (state, tx) = test_app_state();
        (app(state, Path::new("/nonexistent/padscope-dist")), tx)
    }

    async fn get_request(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let (router, _tx) = test_router();
        let (status, _) = get_request(router, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn gamepads_route_serializes_list() {
        let (router, tx) = test_router();
        tx.send(connected(5, "Pad")).unwrap();

        let (status, body) = get_request(router, "/api/gamepads").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 5,
                "name": "Pad",
                "controller_type": "sdl",
                "vendor_id": 0x054c,
                "product_id": 0x0ce6
            }])
        );
    }

    #[tokio::test]
    async fn state_route_maps_errors_to_status() {
        let (router, _tx) = test_router();
        let (status, _) = get_request(router.clone(), "/api/gamepads/sdl/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_request(router.clone(), "/api/gamepads/joystick/9").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_request(router, "/api/gamepads/sdl/not-a-number").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn state_route_returns_neutral_state_after_connect() {
        let (router, tx) = test_router();
        tx.send(connected(2, "Pad")).unwrap();

        let (status, body) = get_request(router, "/api/gamepads/sdl/2").await;
        assert_eq!(status, StatusCode::OK);
        let state: pads::GamepadState = serde_json::from_slice(&body).unwrap();
        assert_eq!(state, pads::GamepadState::neutral());
    }
}
