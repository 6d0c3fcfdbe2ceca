//! # canvas-demos
//!
//! Leptos + WASM host for the canvas demos.
//!
//! This crate mounts one page per demo, hands each page's `<canvas>` to the
//! matching engine from the `canvas` crate, forwards pointer events, and drives
//! the circle field from a `requestAnimationFrame` loop. Page-level JSON
//! configuration is read from the document and logging goes to the browser
//! console.

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod util;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install console logging and mount the app.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    log::info!("canvas demos starting");
    leptos::mount::mount_to_body(app::App);
}
