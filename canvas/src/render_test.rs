#![allow(clippy::float_cmp)]

use super::*;

fn shape(id: &str, geometry: Geometry, timestamp: Option<i64>) -> Shape {
    Shape { id: id.to_owned(), geometry, color: "#1E88E5".to_owned(), user_id: "u".to_owned(), timestamp }
}

// --- circle_radius ---

#[test]
fn circle_radius_is_straight_line_distance() {
    assert_eq!(circle_radius(0.0, 30.0), 30.0);
    assert_eq!(circle_radius(3.0, 4.0), 5.0);
}

#[test]
fn circle_radius_ignores_drag_direction() {
    assert_eq!(circle_radius(-3.0, -4.0), 5.0);
}

// --- shape_op ---

#[test]
fn circle_op_uses_origin_as_center() {
    let s = shape("c", Geometry::Circle { x: 50.0, y: 50.0, width: 0.0, height: 30.0 }, Some(1));
    assert_eq!(
        shape_op(&s),
        Some(DrawOp::Circle { cx: 50.0, cy: 50.0, radius: 30.0, color: "#1E88E5".to_owned() })
    );
}

#[test]
fn rect_op_keeps_signed_extent() {
    let s = shape("r", Geometry::Rectangle { x: 10.0, y: 10.0, width: -5.0, height: 8.0 }, Some(1));
    assert_eq!(
        shape_op(&s),
        Some(DrawOp::Rect { x: 10.0, y: 10.0, width: -5.0, height: 8.0, color: "#1E88E5".to_owned() })
    );
}

#[test]
fn freehand_op_keeps_point_order() {
    let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
    let s = shape("f", Geometry::Freehand { points: points.clone() }, Some(1));
    assert_eq!(shape_op(&s), Some(DrawOp::Stroke { points, color: "#1E88E5".to_owned() }));
}

#[test]
fn empty_freehand_has_no_op() {
    let s = shape("f", Geometry::Freehand { points: vec![] }, Some(1));
    assert_eq!(shape_op(&s), None);
}

// --- scene ---

#[test]
fn scene_of_empty_store_is_empty() {
    let store = ShapeStore::new();
    assert!(scene(&store, None).is_empty());
}

#[test]
fn scene_orders_persisted_by_timestamp_then_draft() {
    let mut store = ShapeStore::new();
    store.load_snapshot(vec![
        shape("late", Geometry::Rectangle { x: 2.0, y: 0.0, width: 1.0, height: 1.0 }, Some(200)),
        shape("early", Geometry::Rectangle { x: 1.0, y: 0.0, width: 1.0, height: 1.0 }, Some(100)),
    ]);
    let draft = shape("draft", Geometry::Rectangle { x: 3.0, y: 0.0, width: 1.0, height: 1.0 }, None);

    let ops = scene(&store, Some(&draft));
    let xs: Vec<f64> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { x, .. } => Some(*x),
            _ => None,
        })
        .collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
}

#[test]
fn scene_skips_empty_shapes() {
    let mut store = ShapeStore::new();
    store.load_snapshot(vec![
        shape("empty", Geometry::Freehand { points: vec![] }, Some(1)),
        shape("dot", Geometry::Freehand { points: vec![Point::new(1.0, 1.0)] }, Some(2)),
    ]);
    assert_eq!(scene(&store, None).len(), 1);
}
