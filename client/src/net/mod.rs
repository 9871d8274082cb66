//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls to the local server; the wire schema is the
//! shared `pads` crate.

pub mod api;
