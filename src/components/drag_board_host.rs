//! Host for the drag board.
//!
//! The board has no animation: it draws once on mount and again whenever the
//! engine asks for it through `Action::RenderNeeded`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use canvas::engine::{Action, BoardEngine};

use crate::error::{HostError, js_message};
use crate::util::canvas_input::{map_button, pointer_point, process_actions};
use crate::util::page_config::board_config;
use crate::util::viewport::sync_board_viewport;

fn render(engine: &BoardEngine) {
    if let Err(e) = engine.render() {
        log::error!("drag board render failed: {}", js_message(&e));
    }
}

fn apply(engine: &BoardEngine, actions: Vec<Action>) {
    if process_actions(actions, engine.canvas()) {
        render(engine);
    }
}

#[component]
pub fn DragBoardHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine = Rc::new(RefCell::new(None::<BoardEngine>));

    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            match mount(canvas) {
                Ok(instance) => *engine.borrow_mut() = Some(instance),
                Err(e) => log::error!("drag board failed to start: {e}"),
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
                if sync_board_viewport(engine) {
                    render(engine);
                }
                let actions = engine.on_pointer_down(pointer_point(&ev), map_button(ev.button()));
                apply(engine, actions);
            }
        }
    };

    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.on_pointer_move(pointer_point(&ev));
                apply(engine, actions);
            }
        }
    };

    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.on_pointer_up(pointer_point(&ev), map_button(ev.button()));
                apply(engine, actions);
            }
        }
    };

    let on_pointer_leave = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::PointerEvent| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.on_pointer_leave();
                apply(engine, actions);
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

fn mount(canvas: web_sys::HtmlCanvasElement) -> Result<BoardEngine, HostError> {
    let config = board_config();
    let mut instance = BoardEngine::new(canvas, &config).map_err(|e| HostError::canvas(&e))?;
    sync_board_viewport(&mut instance);
    instance.render().map_err(|e| HostError::canvas(&e))?;
    log::info!("drag board mounted with {} rects", instance.core.doc.len());
    Ok(instance)
}
