//! # finance-client
//!
//! Leptos + WASM frontend for the personal-finance web client.
//!
//! This crate holds the session and authorization layer (credential store,
//! intercepting HTTP client, session context, route guard) plus the pages
//! built on it. It is compiled with `hydrate` for the browser and with `ssr`
//! for the host that server-renders it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
