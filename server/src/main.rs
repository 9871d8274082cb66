use std::process::ExitCode;

use server::config::ServerConfig;
use server::gamepad::ControllerManager;
use server::{routes, state};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let state = state::AppState::new(build_manager(&config));
    let app = routes::app(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "padscope listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Attach every backend compiled in. Backends that fail to start are logged
/// and skipped; the server still runs and lists what it can.
fn build_manager(config: &ServerConfig) -> ControllerManager {
    #[allow(unused_mut)]
    let mut manager = ControllerManager::new(config.poll_budget);

    #[cfg(feature = "sdl")]
    {
        match server::gamepad::sdl::spawn(config.sdl_mappings_file.clone(), server::gamepad::sdl::DEFAULT_TICK) {
            Ok(events) => {
                tracing::info!("SDL controller backend started");
                manager = manager.with_events(events);
            }
            Err(e) => tracing::warn!(error = %e, "SDL controller backend unavailable"),
        }
    }

    #[cfg(all(windows, feature = "xinput"))]
    {
        match server::gamepad::xinput::SystemXInput::probe() {
            Ok(source) => {
                tracing::info!("XInput controller backend started");
                manager = manager.with_xinput(Box::new(source));
            }
            Err(e) => tracing::warn!(error = %e, "XInput controller backend unavailable"),
        }
    }

    #[cfg(not(any(feature = "sdl", all(windows, feature = "xinput"))))]
    tracing::warn!("no controller backend compiled in; enable the `sdl` or `xinput` feature");

    manager
}
