//! Canvas sizing helpers shared by the canvas hosts.
//!
//! The canvas is laid out by CSS to fill its container; these helpers read
//! that layout size and push it into the engines, which size the backing
//! store at CSS size times device pixel ratio. Hosts call them on mount and
//! again every frame (circle field) or every pointer-down (drag board), so a
//! window resize is picked up without a dedicated listener.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use canvas::engine::{BoardEngine, FieldEngine};
use web_sys::HtmlCanvasElement;

/// Canvas layout size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Build from raw DOM measurements, clamping to at least one pixel and a
    /// ratio of at least 1 so a collapsed element never yields an empty surface.
    #[must_use]
    pub fn from_client(client_width: i32, client_height: i32, dpr: f64) -> Self {
        Self {
            width: f64::from(client_width).max(1.0),
            height: f64::from(client_height).max(1.0),
            dpr: if dpr.is_finite() { dpr.max(1.0) } else { 1.0 },
        }
    }
}

/// Read the canvas element's CSS dimensions and device pixel ratio.
#[must_use]
pub fn measure(canvas: &HtmlCanvasElement) -> Option<Viewport> {
    let window = web_sys::window()?;
    Some(Viewport::from_client(canvas.client_width(), canvas.client_height(), window.device_pixel_ratio()))
}

/// Push the current layout size into the circle field.
pub fn sync_field_viewport(engine: &mut FieldEngine) {
    if let Some(v) = measure(engine.canvas()) {
        engine.set_viewport(v.width, v.height, v.dpr);
    }
}

/// Push the current layout size into the drag board. Returns true when the
/// backing store was resized and the board must be redrawn.
pub fn sync_board_viewport(engine: &mut BoardEngine) -> bool {
    match measure(engine.canvas()) {
        Some(v) => engine.set_viewport(v.width, v.height, v.dpr),
        None => false,
    }
}
