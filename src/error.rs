//! Host-side failures.
//!
//! Every variant is a startup failure: once a demo is mounted its engine calls
//! are total. Components log these and leave the canvas blank.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("browser window is unavailable")]
    MissingWindow,
    #[error("canvas is unusable: {0}")]
    Canvas(String),
    #[error("requestAnimationFrame failed: {0}")]
    FrameRequest(String),
}

impl HostError {
    /// Wrap a JS exception raised while acquiring or drawing to the canvas.
    #[must_use]
    pub fn canvas(err: &JsValue) -> Self {
        Self::Canvas(js_message(err))
    }

    /// Wrap a JS exception raised while scheduling a frame.
    #[must_use]
    pub fn frame_request(err: &JsValue) -> Self {
        Self::FrameRequest(js_message(err))
    }
}

/// Best-effort human-readable text for a thrown JS value.
#[must_use]
pub fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
