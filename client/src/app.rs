//! Root application component and polling loops.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the bootstrapper. Owns the shared gamepad state and keeps
//! it fresh by polling the server: the controller list at a slow cadence, the
//! selected controller's state at a fast one.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::bootstrap::BootConfig;
use crate::components::gamepad_list::GamepadList;
use crate::components::gamepad_view::GamepadView;
use crate::state::gamepads::GamepadsState;

/// Interval between controller list refreshes.
pub const LIST_POLL_MS: u64 = 1000;

/// Interval between state refreshes of the selected controller.
pub const STATE_POLL_MS: u64 = 50;

/// Root component. Provides `BootConfig` and `RwSignal<GamepadsState>`.
#[component]
pub fn App(config: BootConfig) -> impl IntoView {
    provide_meta_context();

    let theme = config.theme.class_name();
    provide_context(config);

    let gamepads = RwSignal::new(GamepadsState { loading: true, ..GamepadsState::default() });
    provide_context(gamepads);

    #[cfg(feature = "csr")]
    spawn_polling(gamepads);

    let status = move || {
        let state = gamepads.get();
        if let Some(err) = state.error {
            err
        } else if state.loading {
            "Looking for controllers…".to_owned()
        } else {
            format!("{} controller(s)", state.pads.len())
        }
    };

    view! {
        <Title text="padscope"/>
        <main class="padscope" data-theme=theme>
            <GamepadList/>
            <GamepadView/>
            <footer class="padscope__status" class:padscope__status--error=move || gamepads.get().error.is_some()>
                {status}
            </footer>
        </main>
    }
}

#[cfg(feature = "csr")]
fn spawn_polling(gamepads: RwSignal<GamepadsState>) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use crate::net::api;
    use crate::state::gamepads::PadKey;

    let alive = Arc::new(AtomicBool::new(true));

    let list_alive = alive.clone();
    leptos::task::spawn_local(async move {
        while list_alive.load(Ordering::Relaxed) {
            match api::fetch_gamepads().await {
                Ok(pads) => gamepads.update(|s| {
                    s.clear_error();
                    s.apply_list(pads);
                }),
                Err(e) => {
                    log::warn!("gamepad list poll failed: {e}");
                    gamepads.update(|s| s.set_error(e));
                }
            }
            gloo_timers::future::sleep(Duration::from_millis(LIST_POLL_MS)).await;
        }
    });

    let state_alive = alive.clone();
    leptos::task::spawn_local(async move {
        while state_alive.load(Ordering::Relaxed) {
            let selected: Option<PadKey> = gamepads.with_untracked(|s| s.selected);
            if let Some(key) = selected {
                match api::fetch_gamepad_state(key.kind, key.id).await {
                    Ok(state) => gamepads.update(|s| s.apply_state(key, state)),
                    Err(e) => log::debug!("state poll for {}/{} failed: {e}", key.kind, key.id),
                }
            }
            gloo_timers::future::sleep(Duration::from_millis(STATE_POLL_MS)).await;
        }
    });

    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
