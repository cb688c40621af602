//! # kickstash-client
//!
//! Leptos + WASM frontend for the KickStash personal sneaker collection.
//!
//! This crate contains the collection page, its card/modal/toast
//! components, application state provided through Leptos contexts, and
//! the REST helpers used to talk to the collection server. The server
//! and the session provider that issues access tokens live elsewhere;
//! this crate only consumes their HTTP contracts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
