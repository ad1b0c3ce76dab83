//! Whiteboard page: toolbar over a full-size drawing canvas.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::toolbar::Toolbar;
use crate::state::whiteboard::WhiteboardState;

#[component]
pub fn WhiteboardPage() -> impl IntoView {
    let state = RwSignal::new(WhiteboardState::default());

    view! {
        <main class="whiteboard">
            <Toolbar state=state />
            <CanvasHost state=state />
        </main>
    }
}
