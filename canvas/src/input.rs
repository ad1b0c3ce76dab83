//! Input model: tools, the active color, and the gesture state machine.
//!
//! `Tool` and the active color capture the user's intent at the time of a
//! pointer event. `InputState` is the gesture being tracked between
//! pointer-down and pointer-up, carrying the context needed to update the
//! draft shape on every move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::DEFAULT_COLOR;
use crate::doc::{Point, ShapeId, ShapeKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand pen (default).
    #[default]
    Freehand,
    /// Drag out a rectangle.
    Rectangle,
    /// Drag out a circle from its center.
    Circle,
    /// Eraser. Selectable, but erase-by-proximity is not implemented, so it
    /// never produces a shape.
    Eraser,
}

impl Tool {
    /// The shape kind this tool draws, or `None` for tools that draw nothing.
    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Freehand => Some(ShapeKind::Freehand),
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Circle => Some(ShapeKind::Circle),
            Self::Eraser => None,
        }
    }
}

/// Persistent UI state visible to the engine and the host toolbar.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently active drawing tool.
    pub tool: Tool,
    /// Stroke color applied to new shapes.
    pub color: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tool: Tool::default(), color: DEFAULT_COLOR.to_owned() }
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is drawing a new shape.
    Drawing {
        /// Id of the draft shape being built.
        id: ShapeId,
        /// Pointer position at gesture start; rectangle and circle extents
        /// are measured from here.
        origin: Point,
    },
}

impl InputState {
    /// Whether a drawing gesture is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
