//! Rendering: draws the demo scenes to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the demo cores and produces pixels; it does
//! not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level callers ([`crate::engine::FieldEngine::render`],
//! [`crate::engine::BoardEngine::render`]) hand the result to the host.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::circle::Circle;
use crate::doc::Rect;
use crate::engine::{BoardCore, FieldCore};
use crate::geom::Bounds;

/// Acquire the 2D rendering context of `canvas`.
///
/// # Errors
///
/// Returns `Err` if the browser refuses the context or hands back something
/// other than a `CanvasRenderingContext2d`.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has an unexpected type"))
}

/// Draw the circle field: background, then every circle in pool order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw_field(ctx: &CanvasRenderingContext2d, core: &FieldCore, dpr: f64) -> Result<(), JsValue> {
    begin_frame(ctx, core.bounds, dpr)?;
    ctx.set_fill_style_str(&core.config.background);
    ctx.fill_rect(0.0, 0.0, core.bounds.width, core.bounds.height);

    for circle in &core.circles {
        draw_circle(ctx, circle)?;
    }
    Ok(())
}

/// Draw the drag board: optional background, then rectangles bottom-most first.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_board(ctx: &CanvasRenderingContext2d, core: &BoardCore, dpr: f64) -> Result<(), JsValue> {
    begin_frame(ctx, core.bounds, dpr)?;
    if let Some(background) = core.background.as_deref() {
        ctx.set_fill_style_str(background);
        ctx.fill_rect(0.0, 0.0, core.bounds.width, core.bounds.height);
    }

    for rect in core.doc.draw_order() {
        draw_rect(ctx, rect);
    }
    Ok(())
}

/// Reset the transform to CSS pixels and clear the surface.
fn begin_frame(ctx: &CanvasRenderingContext2d, bounds: Bounds, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    Ok(())
}

fn draw_circle(ctx: &CanvasRenderingContext2d, circle: &Circle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU)?;
    ctx.set_fill_style_str(&circle.fill);
    ctx.fill();
    Ok(())
}

fn draw_rect(ctx: &CanvasRenderingContext2d, rect: &Rect) {
    ctx.set_fill_style_str(&rect.fill);
    ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
}
