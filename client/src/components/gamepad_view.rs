//! Live view of the selected controller.
//!
//! DESIGN
//! ======
//! Buttons and axes are rendered straight from the `pads` layout, so the view
//! needs no per-device knowledge. Bar widths come from [`axis_percent`].

#[cfg(test)]
#[path = "gamepad_view_test.rs"]
mod gamepad_view_test;

use leptos::prelude::*;

use pads::{Axis, Button, GamepadState};

use super::gamepad_list::format_vid_pid;
use crate::state::gamepads::GamepadsState;

/// Fill percentage for an axis bar.
///
/// Sticks map `-1..=1` onto the full bar with centre at 50; triggers map
/// `0..=1`. Out-of-range and non-finite values are clamped.
pub fn axis_percent(value: f32, axis: Axis) -> f32 {
    let value = if value.is_finite() { value } else { 0.0 };
    if axis.is_trigger() {
        value.clamp(0.0, 1.0) * 100.0
    } else {
        (value.clamp(-1.0, 1.0) + 1.0) * 50.0
    }
}

pub fn button_class(pressed: bool) -> &'static str {
    if pressed { "pad-button pad-button--pressed" } else { "pad-button" }
}

fn is_pressed(state: &GamepadState, button: Button) -> bool {
    state.buttons.get(button.index()).copied().unwrap_or(false)
}

fn axis_value(state: &GamepadState, axis: Axis) -> f32 {
    state.axes.get(axis.index()).copied().unwrap_or(0.0)
}

/// Button grid and axis bars for the selected controller.
#[component]
pub fn GamepadView() -> impl IntoView {
    let gamepads = expect_context::<RwSignal<GamepadsState>>();

    let header = move || {
        let state = gamepads.get();
        state.selected_info().map(|info| {
            let ids = format_vid_pid(info).unwrap_or_else(|| "unknown ids".to_owned());
            view! {
                <header class="gamepad-view__header">
                    <h2>{info.name.clone()}</h2>
                    <span class="gamepad-view__meta">{format!("{} #{} · {ids}", info.controller_type, info.id)}</span>
                </header>
            }
        })
    };

    let current = move || gamepads.get().current.unwrap_or_default();

    let buttons = move || {
        let state = current();
        Button::ALL
            .iter()
            .map(|&button| {
                view! { <span class=button_class(is_pressed(&state, button))>{button.label()}</span> }
            })
            .collect_view()
    };

    let axes = move || {
        let state = current();
        Axis::ALL
            .iter()
            .map(|&axis| {
                let value = axis_value(&state, axis);
                let width = format!("width: {:.1}%", axis_percent(value, axis));
                view! {
                    <div class="pad-axis" class:pad-axis--trigger=axis.is_trigger()>
                        <span class="pad-axis__label">{axis.label()}</span>
                        <span class="pad-axis__track">
                            <span class="pad-axis__fill" style=width></span>
                        </span>
                        <span class="pad-axis__value">{format!("{value:+.2}")}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="gamepad-view">
            <Show
                when=move || gamepads.get().selected.is_some()
                fallback=|| view! { <p class="gamepad-view__empty">"Select a controller"</p> }
            >
                {header}
                <div class="gamepad-view__buttons">{buttons}</div>
                <div class="gamepad-view__axes">{axes}</div>
            </Show>
        </section>
    }
}
