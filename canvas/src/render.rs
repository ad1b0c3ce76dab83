//! Rendering: turns the shape set into a draw list and rasterizes it.
//!
//! Rendering is split in two. [`scene`] is pure: it maps the persisted
//! shapes plus the in-progress draft to an ordered list of [`DrawOp`]s.
//! [`draw`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]; it clears the surface and paints
//! the ops in order. Neither step mutates application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BACKGROUND, STROKE_WIDTH_PX};
use crate::doc::{Geometry, Point, Shape, ShapeStore};

/// One primitive to paint, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Open polyline through `points`.
    Stroke { points: Vec<Point>, color: String },
    /// Rectangle outline; `width`/`height` may be negative.
    Rect { x: f64, y: f64, width: f64, height: f64, color: String },
    /// Circle outline centered on `(cx, cy)`.
    Circle { cx: f64, cy: f64, radius: f64, color: String },
}

/// Radius for a circle whose origin-to-pointer delta is `(width, height)`.
///
/// This is the straight-line distance from the origin to the pointer, so the
/// result is a true circle through the pointer rather than an ellipse fitted
/// to the drag box.
#[must_use]
pub fn circle_radius(width: f64, height: f64) -> f64 {
    width.hypot(height)
}

/// Map one shape to its draw op. Returns `None` for empty geometry.
#[must_use]
pub fn shape_op(shape: &Shape) -> Option<DrawOp> {
    if shape.geometry.is_empty() {
        return None;
    }
    let color = shape.color.clone();
    let op = match &shape.geometry {
        Geometry::Freehand { points } => DrawOp::Stroke { points: points.clone(), color },
        Geometry::Rectangle { x, y, width, height } => {
            DrawOp::Rect { x: *x, y: *y, width: *width, height: *height, color }
        }
        Geometry::Circle { x, y, width, height } => {
            DrawOp::Circle { cx: *x, cy: *y, radius: circle_radius(*width, *height), color }
        }
    };
    Some(op)
}

/// Build the full draw list: persisted shapes in timestamp order, then the
/// draft on top.
#[must_use]
pub fn scene(store: &ShapeStore, draft: Option<&Shape>) -> Vec<DrawOp> {
    store
        .sorted()
        .iter()
        .chain(draft)
        .filter_map(shape_op)
        .collect()
}

/// Clear the surface and paint `ops` in order.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    ops: &[DrawOp],
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    ctx.set_line_width(STROKE_WIDTH_PX);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for op in ops {
        draw_op(ctx, op)?;
    }
    Ok(())
}

fn draw_op(ctx: &CanvasRenderingContext2d, op: &DrawOp) -> Result<(), JsValue> {
    match op {
        DrawOp::Stroke { points, color } => {
            let Some((first, rest)) = points.split_first() else {
                return Ok(());
            };
            ctx.set_stroke_style_str(color);
            ctx.begin_path();
            ctx.move_to(first.x, first.y);
            if rest.is_empty() {
                // Single sample: a zero-length segment renders as a dot with round caps.
                ctx.line_to(first.x, first.y);
            }
            for p in rest {
                ctx.line_to(p.x, p.y);
            }
            ctx.stroke();
        }
        DrawOp::Rect { x, y, width, height, color } => {
            ctx.set_stroke_style_str(color);
            ctx.stroke_rect(*x, *y, *width, *height);
        }
        DrawOp::Circle { cx, cy, radius, color } => {
            ctx.set_stroke_style_str(color);
            ctx.begin_path();
            ctx.arc(*cx, *cy, *radius, 0.0, 2.0 * PI)?;
            ctx.stroke();
        }
    }
    Ok(())
}
