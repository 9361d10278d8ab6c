//! # yatra-client
//!
//! Leptos + WASM frontend for the Yatra tourism guide-booking platform.
//! Replaces the legacy hand-rolled browser scripting with a Rust-native
//! UI layer speaking to the server-rendered backend over its JSON
//! endpoints (`/guide/my_content`, `/guide/edit_content/{id}`,
//! `/guide/delete_content/{id}`, `/content/{id}`).
//!
//! This crate contains pages, components, application state, the wire
//! DTOs, and the `gloo-net` fetch layer. Booking submission and the
//! login/status routes remain plain navigations into the legacy server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log sinks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
