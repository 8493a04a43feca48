//! # activity-board
//!
//! Leptos + WASM frontend for the Mergington High School activities
//! sign-up page. Fetches the activity collection from the backend,
//! renders activity cards and a sign-up form, and submits registrations
//! and unregistrations over the REST API.
//!
//! Browser-only code (HTTP, timers, mounting) is gated behind the `csr`
//! feature so the state and wire-format logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then
/// mount the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
