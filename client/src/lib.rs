//! # client
//!
//! Leptos CSR frontend for padscope. Lists the controllers the local server
//! sees and shows the selected one's buttons and axes live.
//!
//! The wasm entry point runs [`bootstrap::initialize`] against the browser
//! document; everything below it is plain Rust and tested natively.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod net;
#[cfg(feature = "csr")]
pub mod page;
pub mod state;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Wasm entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::bootstrap::{BootConfig, initialize};
    use crate::page::WebPage;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let result = WebPage::current().and_then(|mut page| {
        initialize(&mut page, &BootConfig::default(), |target, config| {
            let config = config.clone();
            leptos::mount::mount_to(target, move || view! { <App config=config.clone()/> }).forget();
            Ok(())
        })
    });

    if let Err(e) = result {
        log::error!("startup failed: {e}");
        wasm_bindgen::throw_str(&e.to_string());
    }
}
