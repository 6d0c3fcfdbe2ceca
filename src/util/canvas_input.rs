//! Canvas input mapping and pointer helper utilities.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::engine::Action;
use canvas::geom::Point as CanvasPoint;
use canvas::input::Button as CanvasButton;

/// Map a DOM `MouseEvent.button` code to an engine button.
#[must_use]
pub fn map_button(button: i16) -> CanvasButton {
    match button {
        1 => CanvasButton::Middle,
        2 => CanvasButton::Secondary,
        _ => CanvasButton::Primary,
    }
}

/// Pointer position relative to the canvas, in CSS pixels.
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Route board actions to the DOM. Returns true when a redraw was requested.
pub fn process_actions(actions: Vec<Action>, canvas: &web_sys::HtmlCanvasElement) -> bool {
    let mut render = false;
    for action in actions {
        match action {
            Action::RenderNeeded => render = true,
            Action::SetCursor(cursor) => {
                if let Err(e) = canvas.style().set_property("cursor", &cursor) {
                    log::warn!("failed to set cursor {cursor}: {e:?}");
                }
            }
            Action::ObjectMoved { id, x, y } => log::trace!("rect {id} moved to ({x:.1}, {y:.1})"),
        }
    }
    render
}
