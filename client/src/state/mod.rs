//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs wrapped in `RwSignal`s by the root component,
//! so the update rules stay testable without a reactive runtime.

pub mod gamepads;
