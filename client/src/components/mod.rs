//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `RwSignal<GamepadsState>` from Leptos context;
//! only the root component writes polling results into it.

pub mod gamepad_list;
pub mod gamepad_view;
