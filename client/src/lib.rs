//! # client
//!
//! Leptos + WASM frontend for the document notebook: upload sources, ask
//! questions against the retrieval backend, and export the conversation.
//!
//! Answer rendering, message types, and every export format come from the
//! `transcript` crate so the browser view and the exports parse answers the
//! same way. Browser-only code sits behind the `csr` feature; without it the
//! crate still builds natively for tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
