//! # client
//!
//! Leptos + WASM frontend for the garage app.
//!
//! This crate contains the garage page, the bike selection modal, the
//! populator state that sequences bike-list requests, and the wire types
//! shared with the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
