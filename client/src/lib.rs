//! # employee-ui
//!
//! Leptos + WASM frontend for the Avits "add employee" dashboard view.
//!
//! The crate renders the dashboard chrome (header, sidebar) and the employee
//! form. It is compiled with `ssr` for server rendering inside
//! `employee-server`, and with `hydrate` for the browser bundle that wires
//! the event handlers.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook, route `log` to the browser
/// console and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating employee view");
    leptos::mount::hydrate_body(app::App);
}
