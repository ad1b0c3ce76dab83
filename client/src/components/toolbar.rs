//! Whiteboard toolbar: tool buttons, color palette, clear-all, and status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes only to `WhiteboardState`; `CanvasHost` watches that state and
//! forwards changes to the engine.

use leptos::prelude::*;

use canvas::consts::PALETTE;

use crate::state::whiteboard::{TOOLS, WhiteboardState, tool_label};
use crate::util::browser;

/// Toolbar above the whiteboard canvas.
#[component]
pub fn Toolbar(state: RwSignal<WhiteboardState>) -> impl IntoView {
    let on_clear = move |_| {
        if state.with_untracked(|s| s.shape_count == 0) {
            return;
        }
        if browser::confirm("Clear every shape from the board for everyone?") {
            state.update(WhiteboardState::request_clear);
        }
    };

    let tool_buttons = TOOLS
        .iter()
        .map(|&tool| {
            view! {
                <button
                    class="btn wb-toolbar__tool"
                    class:wb-toolbar__tool--active=move || state.with(|s| s.tool == tool)
                    on:click=move |_| state.update(|s| s.tool = tool)
                >
                    {tool_label(tool)}
                </button>
            }
        })
        .collect_view();

    let swatches = PALETTE
        .iter()
        .map(|&color| {
            view! {
                <button
                    class="wb-toolbar__swatch"
                    class:wb-toolbar__swatch--active=move || state.with(|s| s.color == color)
                    style:background-color=color
                    title=color
                    on:click=move |_| state.update(|s| s.color = color.to_owned())
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="wb-toolbar">
            <div class="wb-toolbar__tools">{tool_buttons}</div>
            <div class="wb-toolbar__palette">{swatches}</div>
            <button
                class="btn wb-toolbar__clear"
                disabled=move || state.with(|s| s.shape_count == 0)
                on:click=on_clear
            >
                "Clear all"
            </button>
            <span class="wb-toolbar__status">{move || state.with(WhiteboardState::status_text)}</span>
        </div>
    }
}
