//! Pointer and viewport helpers shared by the canvas host.
//!
//! These bridge DOM events and elements to the imperative canvas engine and
//! only exist in the browser.

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use canvas::doc::Point as CanvasPoint;
#[cfg(feature = "csr")]
use canvas::engine::Engine;

/// Pointer position in canvas CSS pixels.
#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Read the canvas element's CSS size and device pixel ratio, then push them
/// to the engine. Call on mount and on every window resize.
#[cfg(feature = "csr")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}

/// Rasterize the engine's scene, logging rather than raising canvas errors.
#[cfg(feature = "csr")]
pub fn render(engine: &Engine) {
    if let Err(e) = engine.render() {
        log::warn!("canvas render failed: {e:?}");
    }
}
