//! # servicehub
//!
//! Leptos + WASM single-page client for a local-services marketplace with a
//! shared whiteboard.
//!
//! The marketplace lists professionals from the REST API, shows one in
//! detail, and books it for the signed-in customer. The whiteboard hosts the
//! `canvas` crate's drawing engine and syncs shapes through a remote
//! collection (or an in-process one when no shape feed is configured).

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
