//! # client
//!
//! Leptos + WASM frontend for the job platform mock.
//!
//! This crate contains the root component, pages, reusable components, and the
//! small amount of UI state that is not part of the `portal` domain model.
//! Everything runs client-side; there is no server and no network traffic.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and mount the app.
///
/// `portal` logs through `tracing`, which forwards to the `log` facade when no
/// subscriber is installed, so its events show up in the browser console too.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting job platform client");
    leptos::mount::mount_to_body(app::App);
}
