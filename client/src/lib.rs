//! # client
//!
//! Leptos + WASM frontend for the LaundryMart laundry service: public landing
//! page, login, and the administrator dashboard.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and the browser session store. It is compiled with `hydrate` for
//! the browser bundle and with `ssr` for server rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
