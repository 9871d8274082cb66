//! # server
//!
//! Local HTTP service that owns the game controller hardware and exposes it
//! as JSON for the `client` SPA and the `cli`.

pub mod config;
pub mod gamepad;
pub mod routes;
pub mod state;
