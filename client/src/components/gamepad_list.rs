//! Sidebar list of connected controllers.

use leptos::prelude::*;

use pads::GamepadInfo;

use crate::state::gamepads::{GamepadsState, PadKey};

/// `VID:PID` in upper-case hex, or `None` when either id is unknown.
pub fn format_vid_pid(info: &GamepadInfo) -> Option<String> {
    let (vid, pid) = (info.vendor_id?, info.product_id?);
    Some(format!("{vid:04X}:{pid:04X}"))
}

/// Clickable controller list; clicking an entry selects it.
#[component]
pub fn GamepadList() -> impl IntoView {
    let gamepads = expect_context::<RwSignal<GamepadsState>>();

    let rows = move || {
        let state = gamepads.get();
        state
            .pads
            .iter()
            .map(|info| {
                let key = PadKey::of(info);
                let active = state.selected == Some(key);
                let ids = format_vid_pid(info);
                view! {
                    <li>
                        <button
                            class="gamepad-list__item"
                            class:gamepad-list__item--active=active
                            on:click=move |_| gamepads.update(|s| s.select(key))
                        >
                            <span class="gamepad-list__name">{info.name.clone()}</span>
                            <span class="gamepad-list__kind">{info.controller_type.as_str()}</span>
                            {ids.map(|ids| view! { <span class="gamepad-list__ids">{ids}</span> })}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="gamepad-list">
            <Show
                when=move || !gamepads.get().pads.is_empty()
                fallback=|| view! { <p class="gamepad-list__empty">"No controllers connected"</p> }
            >
                <ul>{rows}</ul>
            </Show>
        </nav>
    }
}
