//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{circles::CirclesPage, drag::DragPage};

/// Root application component.
///
/// `/` shows the circle field and `/drag` the drag board. Each page owns its
/// own canvas, so switching routes tears the previous demo down.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Canvas Demos"/>

        <Router>
            <nav class="demo-nav">
                <A href="/">"Circles"</A>
                <A href="/drag">"Drag and drop"</A>
            </nav>
            <main class="demo-stage">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CirclesPage/>
                    <Route path=StaticSegment("drag") view=DragPage/>
                </Routes>
            </main>
        </Router>
    }
}
