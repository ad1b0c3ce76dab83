use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::doc::{Geometry, Point, Shape, ShapeId, ShapeStore, shape_id};
use crate::input::{InputState, Tool, UiState};
use crate::render::{self, DrawOp};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A gesture ended; the shape should be written to the remote collection.
    ShapeFinished(Shape),
    /// The user asked to clear the board; every listed id should be deleted.
    ClearRequested { ids: Vec<ShapeId> },
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    /// Persisted shapes, as last delivered by the remote subscription.
    pub shapes: ShapeStore,
    /// The shape under construction, rendered optimistically until pointer-up.
    pub draft: Option<Shape>,
    pub ui: UiState,
    pub input: InputState,
    /// Author id stamped on every new shape.
    pub user_id: String,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            shapes: ShapeStore::new(),
            draft: None,
            ui: UiState::default(),
            input: InputState::default(),
            user_id: user_id.into(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    // --- Data inputs ---

    /// Replace the persisted shapes with a subscription snapshot.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.shapes.load_snapshot(shapes);
    }

    // --- Tool / color ---

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Set the color applied to new shapes.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.ui.color = color.into();
    }

    // --- Viewport ---

    /// Record viewport dimensions in CSS pixels and the device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Input events ---

    /// Start a gesture at `pt`. `now_ms` is the wall-clock creation time used
    /// in the shape id.
    pub fn on_pointer_down(&mut self, pt: Point, now_ms: i64) -> Vec<Action> {
        if self.input.is_drawing() {
            return Vec::new();
        }
        let Some(kind) = self.ui.tool.shape_kind() else {
            return Vec::new();
        };

        let id = shape_id(&self.user_id, now_ms);
        self.draft = Some(Shape {
            id: id.clone(),
            geometry: Geometry::start(kind, pt),
            color: self.ui.color.clone(),
            user_id: self.user_id.clone(),
            timestamp: None,
        });
        self.input = InputState::Drawing { id, origin: pt };
        vec![Action::RenderNeeded]
    }

    /// Extend the draft to `pt`.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Drawing { origin, .. } = self.input else {
            return Vec::new();
        };
        let Some(draft) = self.draft.as_mut() else {
            return Vec::new();
        };

        match &mut draft.geometry {
            Geometry::Freehand { points } => points.push(pt),
            Geometry::Rectangle { width, height, .. } | Geometry::Circle { width, height, .. } => {
                *width = pt.x - origin.x;
                *height = pt.y - origin.y;
            }
        }
        vec![Action::RenderNeeded]
    }

    /// End the gesture and hand the finished draft to the host.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        match self.draft.take() {
            Some(shape) => vec![Action::ShapeFinished(shape), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Abandon the gesture without persisting anything.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        match self.draft.take() {
            Some(_) => vec![Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Ask the host to delete every persisted shape. The host is expected to
    /// confirm with the user before calling this.
    pub fn request_clear(&mut self) -> Vec<Action> {
        if self.shapes.is_empty() {
            return Vec::new();
        }
        vec![Action::ClearRequested { ids: self.shapes.ids() }]
    }

    // --- Queries ---

    /// The draw list for the current state.
    #[must_use]
    pub fn scene(&self) -> Vec<DrawOp> {
        render::scene(&self.shapes, self.draft.as_ref())
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, drawing as `user_id`.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, user_id: impl Into<String>) -> Self {
        Self { canvas, core: EngineCore::new(user_id) }
    }

    // --- Delegated data inputs ---

    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.core.load_snapshot(shapes);
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.core.set_color(color);
    }

    // --- Viewport ---

    /// Update viewport dimensions and size the backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).round().max(1.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(1.0) as u32);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, now_ms: i64) -> Vec<Action> {
        self.core.on_pointer_down(pt, now_ms)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    pub fn request_clear(&mut self) -> Vec<Action> {
        self.core.request_clear()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(
            &ctx,
            &self.core.scene(),
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }
}
