//! # client
//!
//! Leptos + WASM frontend for RAG Mini: upload a document, then ask questions
//! about it and read the cited source chunks.
//!
//! The crate is rendered on the server (`ssr`) by the `server` host and
//! hydrated in the browser (`hydrate`). Backend calls only happen after
//! hydration; the server-side build renders the initial empty state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
