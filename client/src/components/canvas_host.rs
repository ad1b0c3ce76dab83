//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns gesture handling and rasterization. This host feeds
//! it pointer events, pushes every collection snapshot into it, and hands the
//! actions it returns to `BoardSync`. Writes and deletes run as detached local
//! tasks, so a slow collection never blocks input. Unmounting stops the live
//! query and closes the shape feed socket, if any.

use leptos::prelude::*;

use crate::state::whiteboard::WhiteboardState;

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use canvas::sync::BoardSync;
#[cfg(feature = "csr")]
use futures::StreamExt;
#[cfg(feature = "csr")]
use futures::future::{AbortHandle, Abortable};

#[cfg(feature = "csr")]
use crate::config::ClientConfig;
#[cfg(feature = "csr")]
use crate::net::shape_feed::BoardBackend;
#[cfg(feature = "csr")]
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::whiteboard::{BoardMode, author_id};
#[cfg(feature = "csr")]
use crate::util::browser;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{pointer_point, render, sync_viewport};

#[cfg(feature = "csr")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;
#[cfg(feature = "csr")]
type SharedSync = Rc<BoardSync<BoardBackend>>;

/// Render locally; send everything else to the collection in the background.
#[cfg(feature = "csr")]
fn process_actions(actions: Vec<Action>, engine: &Engine, sync: &SharedSync) {
    for action in actions {
        match action {
            Action::RenderNeeded => render(engine),
            remote => {
                let sync = Rc::clone(sync);
                leptos::task::spawn_local(async move { sync.apply(remote).await });
            }
        }
    }
}

/// Whiteboard drawing surface.
#[component]
pub fn CanvasHost(state: RwSignal<WhiteboardState>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(not(feature = "csr"))]
    let _ = state;

    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));
    #[cfg(feature = "csr")]
    let sync: SharedSync = {
        let config = expect_context::<ClientConfig>();
        let backend = BoardBackend::from_feed_url(config.shape_feed_url.as_deref(), &config.shapes_path);
        let mode = if backend.is_remote() { BoardMode::Shared } else { BoardMode::Local };
        state.update(|s| s.mode = mode);
        Rc::new(BoardSync::new(backend))
    };

    // Create the engine once the canvas is mounted, then start the live query.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let sync = Rc::clone(&sync);
        let (abort, registration) = AbortHandle::new_pair();
        let registration = Cell::new(Some(registration));
        let closer = sync.collection().closer();
        on_cleanup(move || {
            abort.abort();
            if let Some(closer) = closer {
                closer.close();
            }
        });

        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let author = author_id(auth.get_untracked().user.as_ref(), browser::anonymous_id);
            let mut instance = Engine::new(canvas, author);
            let ui = state.get_untracked();
            instance.set_tool(ui.tool);
            instance.set_color(ui.color);
            sync_viewport(&mut instance, &canvas_ref);
            render(&instance);
            *engine.borrow_mut() = Some(instance);

            let Some(registration) = registration.take() else {
                return;
            };
            let mut snapshots = sync.subscribe();
            let engine = Rc::clone(&engine);
            leptos::task::spawn_local(async move {
                let feed = async move {
                    while let Some(shapes) = snapshots.next().await {
                        let count = shapes.len();
                        if let Some(engine) = engine.borrow_mut().as_mut() {
                            engine.load_snapshot(shapes);
                            render(engine);
                        }
                        state.update(|s| s.shape_count = count);
                    }
                    log::info!("board subscription ended");
                };
                if Abortable::new(feed, registration).await.is_err() {
                    log::debug!("board subscription stopped");
                }
            });
        });
    }

    // Signed-in users draw under their session id.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(user) = auth.get().user else {
                return;
            };
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.core.user_id = user.id;
            }
        });
    }

    // Toolbar tool and color.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let (tool, color) = state.with(|s| (s.tool, s.color.clone()));
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_tool(tool);
                engine.set_color(color);
            }
        });
    }

    // Confirmed "Clear all" from the toolbar.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let sync = Rc::clone(&sync);
        let last_clear = Cell::new(state.get_untracked().clear_seq);
        Effect::new(move || {
            let seq = state.with(|s| s.clear_seq);
            if seq == last_clear.get() {
                return;
            }
            last_clear.set(seq);
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.request_clear();
                process_actions(actions, engine, &sync);
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                sync_viewport(engine, &canvas_ref);
                render(engine);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let sync = Rc::clone(&sync);
            move |ev: leptos::ev::PointerEvent| {
                if ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    if let Err(e) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture failed: {e:?}");
                    }
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_down(pointer_point(&ev), browser::now_ms());
                    process_actions(actions, engine, &sync);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let sync = Rc::clone(&sync);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_move(pointer_point(&ev));
                    process_actions(actions, engine, &sync);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let sync = Rc::clone(&sync);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    if canvas.has_pointer_capture(ev.pointer_id()) {
                        if let Err(e) = canvas.release_pointer_capture(ev.pointer_id()) {
                            log::debug!("pointer release failed: {e:?}");
                        }
                    }
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up();
                    process_actions(actions, engine, &sync);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // The system took the pointer away (scroll, lost capture): drop the draft.
    let on_pointer_cancel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let sync = Rc::clone(&sync);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_cancel();
                    process_actions(actions, engine, &sync);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <div class="wb-canvas">
            <canvas
                class="wb-canvas__surface"
                style="touch-action: none"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
