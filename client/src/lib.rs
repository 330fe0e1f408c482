//! # client
//!
//! Leptos + WASM frontend for the Rentex rental marketplace admin.
//!
//! This crate contains pages, components, page-owned state models, the REST
//! adapters, and small browser utilities. The server crate renders [`app::App`]
//! for SSR; the `hydrate` entry point below takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
