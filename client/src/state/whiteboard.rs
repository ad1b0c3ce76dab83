//! Whiteboard page chrome: active tool, color, and board status.
//!
//! DESIGN
//! ======
//! The canvas engine owns the drawing state. This struct holds only what the
//! toolbar shows and edits; `CanvasHost` pushes tool and color changes into
//! the engine and reports the shape count back after every snapshot.

#[cfg(test)]
#[path = "whiteboard_test.rs"]
mod whiteboard_test;

use canvas::consts::DEFAULT_COLOR;
use canvas::input::Tool;

use crate::net::types::User;

/// Where the board's shapes are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardMode {
    /// This tab only.
    #[default]
    Local,
    /// Shared through the shape feed.
    Shared,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhiteboardState {
    pub tool: Tool,
    pub color: String,
    pub mode: BoardMode,
    /// Persisted shapes in the latest snapshot.
    pub shape_count: usize,
    /// Bumped each time the user confirms "Clear all".
    pub clear_seq: u64,
}

impl Default for WhiteboardState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: DEFAULT_COLOR.to_owned(),
            mode: BoardMode::Local,
            shape_count: 0,
            clear_seq: 0,
        }
    }
}

impl WhiteboardState {
    pub fn request_clear(&mut self) {
        self.clear_seq += 1;
    }

    #[must_use]
    pub fn status_text(&self) -> String {
        let noun = if self.shape_count == 1 { "shape" } else { "shapes" };
        let mode = match self.mode {
            BoardMode::Local => "local board",
            BoardMode::Shared => "shared board",
        };
        format!("{} {noun} · {mode}", self.shape_count)
    }
}

/// Label for a tool button.
#[must_use]
pub fn tool_label(tool: Tool) -> &'static str {
    match tool {
        Tool::Freehand => "Pen",
        Tool::Rectangle => "Rectangle",
        Tool::Circle => "Circle",
        Tool::Eraser => "Eraser",
    }
}

/// Tools offered by the toolbar, in display order.
pub const TOOLS: [Tool; 4] = [Tool::Freehand, Tool::Rectangle, Tool::Circle, Tool::Eraser];

/// Author id stamped on new shapes: the session user's id when signed in,
/// otherwise the per-browser anonymous id from `anonymous`.
pub fn author_id<F>(user: Option<&User>, anonymous: F) -> String
where
    F: FnOnce() -> String,
{
    user.map_or_else(anonymous, |u| u.id.clone())
}
