//! Recurring `requestAnimationFrame` driver.
//!
//! The callback re-arms itself every frame until its canvas leaves the
//! document. At that point the closure is taken out of its holder and
//! dropped, which breaks the self-reference and ends the loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{HtmlCanvasElement, Window};

use crate::error::HostError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Run `on_frame` once per animation frame while `canvas` stays connected.
///
/// # Errors
///
/// Fails when there is no window or the first frame cannot be scheduled.
/// Later scheduling failures are logged and stop the loop.
pub fn run_frame_loop(canvas: HtmlCanvasElement, mut on_frame: impl FnMut(f64) + 'static) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::MissingWindow)?;

    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !canvas.is_connected() {
            log::debug!("canvas detached; stopping frame loop");
            holder_for_cb.borrow_mut().take();
            return;
        }
        on_frame(ts);
        let rearmed = match holder_for_cb.borrow().as_ref() {
            Some(cb) => schedule(&window_for_cb, cb),
            None => return,
        };
        if let Err(e) = rearmed {
            log::error!("{e}; stopping frame loop");
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    schedule(&window, &cb)?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}

fn schedule(window: &Window, cb: &FrameCallback) -> Result<i32, HostError> {
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| HostError::frame_request(&e))
}
