#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::ShapeKind;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn finished(actions: &[Action]) -> Option<&Shape> {
    actions.iter().find_map(|a| match a {
        Action::ShapeFinished(shape) => Some(shape),
        _ => None,
    })
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn persisted(id: &str, ts: i64) -> Shape {
    Shape {
        id: id.to_owned(),
        geometry: Geometry::Rectangle { x: 0.0, y: 0.0, width: 1.0, height: 1.0 },
        color: "#000000".to_owned(),
        user_id: "other".to_owned(),
        timestamp: Some(ts),
    }
}

// =============================================================
// EngineCore: construction and defaults
// =============================================================

#[test]
fn core_new_is_idle_with_no_shapes() {
    let core = EngineCore::new("alice");
    assert!(core.draft.is_none());
    assert!(core.shapes.is_empty());
    assert!(matches!(core.input, InputState::Idle));
    assert_eq!(core.user_id, "alice");
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn set_tool_and_color_update_ui() {
    let mut core = EngineCore::new("alice");
    core.set_tool(Tool::Circle);
    core.set_color("#E53935");
    assert_eq!(core.ui.tool, Tool::Circle);
    assert_eq!(core.ui.color, "#E53935");
}

#[test]
fn set_viewport_records_dimensions() {
    let mut core = EngineCore::new("alice");
    core.set_viewport(800.0, 600.0, 2.0);
    assert_eq!(core.viewport_width, 800.0);
    assert_eq!(core.viewport_height, 600.0);
    assert_eq!(core.dpr, 2.0);
}

// =============================================================
// Gesture start
// =============================================================

#[test]
fn pointer_down_allocates_draft_with_user_and_time_id() {
    let mut core = EngineCore::new("alice");
    core.set_color("#43A047");
    let actions = core.on_pointer_down(pt(5.0, 6.0), 1234);

    assert!(has_render_needed(&actions));
    let draft = core.draft.as_ref().unwrap();
    assert_eq!(draft.id, "alice-1234");
    assert_eq!(draft.user_id, "alice");
    assert_eq!(draft.color, "#43A047");
    assert_eq!(draft.timestamp, None);
    assert_eq!(draft.kind(), ShapeKind::Freehand);
    assert!(core.input.is_drawing());
}

#[test]
fn eraser_pointer_down_creates_nothing() {
    let mut core = EngineCore::new("alice");
    core.set_tool(Tool::Eraser);
    let actions = core.on_pointer_down(pt(5.0, 6.0), 1);
    assert!(actions.is_empty());
    assert!(core.draft.is_none());
    assert!(!core.input.is_drawing());
}

#[test]
fn eraser_gesture_never_finishes_a_shape() {
    let mut core = EngineCore::new("alice");
    core.set_tool(Tool::Eraser);
    core.on_pointer_down(pt(0.0, 0.0), 1);
    core.on_pointer_move(pt(10.0, 10.0));
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn second_pointer_down_during_gesture_is_ignored() {
    let mut core = EngineCore::new("alice");
    core.on_pointer_down(pt(0.0, 0.0), 1);
    let actions = core.on_pointer_down(pt(9.0, 9.0), 2);
    assert!(actions.is_empty());
    assert_eq!(core.draft.as_ref().map(|d| d.id.as_str()), Some("alice-1"));
}

// =============================================================
// Gesture move / end
// =============================================================

#[test]
fn freehand_gesture_persists_exact_points_in_order() {
    let mut core = EngineCore::new("alice");
    core.on_pointer_down(pt(0.0, 0.0), 10);
    core.on_pointer_move(pt(10.0, 0.0));
    core.on_pointer_move(pt(10.0, 10.0));
    let actions = core.on_pointer_up();

    let shape = finished(&actions).unwrap();
    assert_eq!(
        shape.geometry,
        Geometry::Freehand { points: vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)] }
    );
}

#[test]
fn circle_gesture_persists_signed_delta_and_renders_radius() {
    let mut core = EngineCore::new("alice");
    core.set_tool(Tool::Circle);
    core.on_pointer_down(pt(50.0, 50.0), 10);
    core.on_pointer_move(pt(50.0, 80.0));
    let actions = core.on_pointer_up();

    let shape = finished(&actions).unwrap().clone();
    assert_eq!(shape.geometry, Geometry::Circle { x: 50.0, y: 50.0, width: 0.0, height: 30.0 });

    core.load_snapshot(vec![Shape { timestamp: Some(1), ..shape }]);
    let ops = core.scene();
    assert_eq!(ops.len(), 1);
    let DrawOp::Circle { radius, cx, cy, .. } = &ops[0] else {
        panic!("expected circle op, got {:?}", ops[0]);
    };
    assert_eq!((*cx, *cy, *radius), (50.0, 50.0, 30.0));
}

#[test]
fn rectangle_drag_up_left_yields_negative_extent() {
    let mut core = EngineCore::new("alice");
    core.set_tool(Tool::Rectangle);
    core.on_pointer_down(pt(100.0, 100.0), 1);
    core.on_pointer_move(pt(70.0, 60.0));
    let actions = core.on_pointer_up();
    assert_eq!(
        finished(&actions).unwrap().geometry,
        Geometry::Rectangle { x: 100.0, y: 100.0, width: -30.0, height: -40.0 }
    );
}

#[test]
fn rectangle_tracks_latest_pointer_only() {
    let mut core = EngineCore::new("alice");
    core.set_tool(Tool::Rectangle);
    core.on_pointer_down(pt(0.0, 0.0), 1);
    core.on_pointer_move(pt(50.0, 50.0));
    core.on_pointer_move(pt(20.0, 10.0));
    let actions = core.on_pointer_up();
    assert_eq!(
        finished(&actions).unwrap().geometry,
        Geometry::Rectangle { x: 0.0, y: 0.0, width: 20.0, height: 10.0 }
    );
}

#[test]
fn pointer_move_without_gesture_is_noop() {
    let mut core = EngineCore::new("alice");
    assert!(core.on_pointer_move(pt(1.0, 1.0)).is_empty());
}

#[test]
fn pointer_up_clears_draft_and_does_not_add_to_persisted_set() {
    let mut core = EngineCore::new("alice");
    core.on_pointer_down(pt(0.0, 0.0), 1);
    let actions = core.on_pointer_up();
    assert!(finished(&actions).is_some());
    assert!(core.draft.is_none());
    assert!(core.shapes.is_empty());
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn pointer_up_without_gesture_is_noop() {
    let mut core = EngineCore::new("alice");
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn pointer_cancel_discards_draft_without_finishing() {
    let mut core = EngineCore::new("alice");
    core.set_tool(Tool::Rectangle);
    core.on_pointer_down(pt(0.0, 0.0), 1);
    core.on_pointer_move(pt(40.0, 30.0));

    let actions = core.on_pointer_cancel();
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(finished(&actions).is_none());
    assert!(core.draft.is_none());
    assert!(matches!(core.input, InputState::Idle));
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn pointer_cancel_without_gesture_is_noop() {
    let mut core = EngineCore::new("alice");
    assert!(core.on_pointer_cancel().is_empty());
}

// =============================================================
// Rendering state
// =============================================================

#[test]
fn draft_renders_on_top_of_persisted_shapes() {
    let mut core = EngineCore::new("alice");
    core.load_snapshot(vec![persisted("b-1", 5)]);
    core.set_tool(Tool::Circle);
    core.on_pointer_down(pt(1.0, 1.0), 1);

    let ops = core.scene();
    assert_eq!(ops.len(), 2);
    assert!(matches!(ops[0], DrawOp::Rect { .. }));
    assert!(matches!(ops[1], DrawOp::Circle { .. }));
}

#[test]
fn snapshot_orders_authors_by_persisted_timestamp() {
    let mut core = EngineCore::new("alice");
    let mut mine = persisted("alice-1", 300);
    mine.user_id = "alice".to_owned();
    let theirs = persisted("bob-999", 200);
    core.load_snapshot(vec![mine, theirs]);
    assert_eq!(core.shapes.ids(), vec!["bob-999", "alice-1"]);
}

// =============================================================
// Clear-all
// =============================================================

#[test]
fn request_clear_lists_every_known_id() {
    let mut core = EngineCore::new("alice");
    core.load_snapshot(vec![persisted("a", 1), persisted("b", 2)]);
    let actions = core.request_clear();
    assert_eq!(actions, vec![Action::ClearRequested { ids: vec!["a".to_owned(), "b".to_owned()] }]);
}

#[test]
fn request_clear_on_empty_board_is_noop() {
    let mut core = EngineCore::new("alice");
    assert!(core.request_clear().is_empty());
}
