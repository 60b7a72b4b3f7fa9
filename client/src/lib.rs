//! # client
//!
//! Leptos + WASM frontend for the Courtside booking portal. Pages render on
//! the server for first paint and hydrate in the browser, where the session
//! is resolved over REST and access wrappers gate what each role sees.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point invoked by the hydration script in the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
