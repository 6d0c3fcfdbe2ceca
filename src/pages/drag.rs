//! Drag-and-drop board page.

use leptos::prelude::*;

use crate::components::drag_board_host::DragBoardHost;

#[component]
pub fn DragPage() -> impl IntoView {
    view! {
        <section class="demo demo-drag">
            <DragBoardHost/>
        </section>
    }
}
