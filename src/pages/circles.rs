//! Circle field page.

use leptos::prelude::*;

use crate::components::circle_field_host::CircleFieldHost;

#[component]
pub fn CirclesPage() -> impl IntoView {
    view! {
        <section class="demo demo-circles">
            <CircleFieldHost/>
        </section>
    }
}
