//! Document model: drawable shapes and the persisted shape store.
//!
//! This module defines what is on the board (`Shape`, `Geometry`, `ShapeKind`)
//! and the runtime store that holds the persisted set pushed down by the
//! remote collection (`ShapeStore`).
//!
//! Shapes reach this layer from two directions: the remote subscription
//! (JSON deserialization, full snapshots) and the input engine (a single
//! in-progress draft, which never enters the store). The renderer reads the
//! store via `sorted` to get draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

/// Unique identifier for a shape: `"{user_id}-{created_ms}"`.
pub type ShapeId = String;

/// A point in canvas (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The kind of a shape, matching the `type` tag on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Polyline through every sampled pointer position.
    Freehand,
    /// Axis-aligned rectangle from an origin corner.
    Rectangle,
    /// Circle centered on the origin.
    Circle,
}

/// Shape geometry, tagged by kind.
///
/// Rectangle and circle extents are signed deltas from the origin, so a drag
/// up or to the left yields negative values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Freehand {
        points: Vec<Point>,
    },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

impl Geometry {
    /// Starting geometry for a gesture that begins at `origin`.
    #[must_use]
    pub fn start(kind: ShapeKind, origin: Point) -> Self {
        match kind {
            ShapeKind::Freehand => Self::Freehand { points: vec![origin] },
            ShapeKind::Rectangle => Self::Rectangle { x: origin.x, y: origin.y, width: 0.0, height: 0.0 },
            ShapeKind::Circle => Self::Circle { x: origin.x, y: origin.y, width: 0.0, height: 0.0 },
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Freehand { .. } => ShapeKind::Freehand,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// A freehand stroke with no points has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Freehand { points } if points.is_empty())
    }
}

/// A shape as stored in the remote collection and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Unique identifier; also the document key in the remote collection.
    pub id: ShapeId,
    /// Kind tag and coordinates.
    #[serde(flatten)]
    pub geometry: Geometry,
    /// Stroke color as a CSS color string.
    pub color: String,
    /// User who drew the shape.
    pub user_id: String,
    /// Server-assigned write time in milliseconds; `None` until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }
}

/// Build the identifier for a shape created by `user_id` at `created_ms`.
#[must_use]
pub fn shape_id(user_id: &str, created_ms: i64) -> ShapeId {
    format!("{user_id}-{created_ms}")
}

/// The persisted shape set, kept in draw order.
///
/// Draw order is server timestamp ascending; ties break on id, and shapes
/// without a timestamp (pending server write) sort last.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Replace all shapes with a full snapshot and re-sort.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.shapes
            .sort_by(|a, b| draw_key(a).cmp(&draw_key(b)).then_with(|| a.id.cmp(&b.id)));
    }

    /// All shapes in draw order (oldest first).
    #[must_use]
    pub fn sorted(&self) -> &[Shape] {
        &self.shapes
    }

    /// Identifiers of every known shape, in draw order.
    #[must_use]
    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(|s| s.id.clone()).collect()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn draw_key(shape: &Shape) -> (bool, i64) {
    match shape.timestamp {
        Some(ts) => (false, ts),
        None => (true, 0),
    }
}
