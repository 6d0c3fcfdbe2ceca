//! Host for the animated circle field.
//!
//! Mounts a `FieldEngine` on the canvas, populates it from `Math.random`, and
//! drives it from a recurring animation frame. Pointer events only update the
//! engine's pointer state; the next frame picks them up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use canvas::engine::FieldEngine;

use crate::error::HostError;
use crate::util::canvas_input::{map_button, pointer_point};
use crate::util::frame_loop::run_frame_loop;
use crate::util::page_config::field_config;
use crate::util::viewport::sync_field_viewport;

#[component]
pub fn CircleFieldHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine = Rc::new(RefCell::new(None::<FieldEngine>));

    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            if let Err(e) = mount(&engine, canvas) {
                log::error!("circle field failed to start: {e}");
            }
        });
    }

    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(canvas) = canvas_ref.get()
                && let Err(e) = canvas.set_pointer_capture(ev.pointer_id())
            {
                log::debug!("pointer capture refused: {e:?}");
            }
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_pointer_down(pointer_point(&ev), map_button(ev.button()));
                log::debug!("circle field press at frame {}", engine.core.frame);
            }
        }
    };

    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_pointer_move(pointer_point(&ev));
            }
        }
    };

    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_pointer_up(pointer_point(&ev), map_button(ev.button()));
            }
        }
    };

    let on_pointer_leave = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.on_pointer_leave();
            }
        }
    };

    view! {
        <div class="demo-surface">
            <canvas
                class="demo-canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            ></canvas>
        </div>
    }
}

fn mount(slot: &Rc<RefCell<Option<FieldEngine>>>, canvas: web_sys::HtmlCanvasElement) -> Result<(), HostError> {
    let config = field_config();
    let mut instance = FieldEngine::new(canvas.clone(), config).map_err(|e| HostError::canvas(&e))?;
    sync_field_viewport(&mut instance);
    instance.populate(&mut js_sys::Math::random);
    log::info!("circle field mounted with {} circles", instance.core.circles.len());
    *slot.borrow_mut() = Some(instance);

    let engine = Rc::clone(slot);
    run_frame_loop(canvas, move |_ts| {
        if let Some(engine) = engine.borrow_mut().as_mut() {
            sync_field_viewport(engine);
            if let Err(e) = engine.frame() {
                log::error!("circle field frame failed: {}", crate::error::js_message(&e));
            }
        }
    })
}
