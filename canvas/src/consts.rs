//! Shared constants for the canvas crate.

// ── Strokes ─────────────────────────────────────────────────────

/// Line width for every shape outline and freehand stroke, in CSS pixels.
pub const STROKE_WIDTH_PX: f64 = 3.0;

/// Canvas background fill applied on every full redraw.
pub const BACKGROUND: &str = "#FFFFFF";

// ── Palette ─────────────────────────────────────────────────────

/// Color used for new shapes until the user picks another one.
pub const DEFAULT_COLOR: &str = "#000000";

/// Colors offered by the whiteboard toolbar.
pub const PALETTE: [&str; 6] = ["#000000", "#E53935", "#1E88E5", "#43A047", "#FDD835", "#8E24AA"];
