use std::collections::HashSet;

use futures::StreamExt;
use futures::executor::block_on;

use super::*;
use crate::doc::{Geometry, Point};
use crate::engine::EngineCore;
use crate::input::Tool;

// =============================================================
// Helpers
// =============================================================

fn shape(id: &str) -> Shape {
    Shape {
        id: id.to_owned(),
        geometry: Geometry::Freehand { points: vec![Point::new(0.0, 0.0)] },
        color: "#000000".to_owned(),
        user_id: "u".to_owned(),
        timestamp: None,
    }
}

fn latest(rx: &mut Snapshots) -> Vec<Shape> {
    block_on(rx.next()).unwrap_or_default()
}

fn ids(shapes: &[Shape]) -> Vec<String> {
    shapes.iter().map(|s| s.id.clone()).collect()
}

/// Collection that rejects writes and deletes for a fixed set of ids and
/// forwards everything else to an in-memory collection.
struct FlakyCollection {
    inner: MemoryCollection,
    broken: HashSet<String>,
}

impl FlakyCollection {
    fn new(broken: &[&str]) -> Self {
        Self { inner: MemoryCollection::new(), broken: broken.iter().map(|s| (*s).to_owned()).collect() }
    }
}

impl ShapeCollection for FlakyCollection {
    fn write(&self, shape: Shape) -> impl Future<Output = Result<(), SyncError>> {
        let broken = self.broken.contains(&shape.id);
        let inner = self.inner.clone();
        async move {
            if broken {
                return Err(SyncError::Write { id: shape.id, reason: "permission denied".to_owned() });
            }
            inner.write(shape).await
        }
    }

    fn delete(&self, id: ShapeId) -> impl Future<Output = Result<(), SyncError>> {
        let broken = self.broken.contains(&id);
        let inner = self.inner.clone();
        async move {
            if broken {
                return Err(SyncError::Delete { id, reason: "unavailable".to_owned() });
            }
            inner.delete(id).await
        }
    }

    fn subscribe(&self) -> Snapshots {
        self.inner.subscribe()
    }
}

// =============================================================
// MemoryCollection
// =============================================================

#[test]
fn subscribe_delivers_current_set_first() {
    let coll = MemoryCollection::new();
    block_on(coll.write(shape("a"))).unwrap();
    let mut rx = coll.subscribe();
    assert_eq!(ids(&latest(&mut rx)), vec!["a"]);
}

#[test]
fn write_stamps_increasing_timestamps() {
    let coll = MemoryCollection::new();
    block_on(coll.write(shape("a"))).unwrap();
    block_on(coll.write(shape("b"))).unwrap();
    let mut rx = coll.subscribe();
    let snap = latest(&mut rx);
    let a = snap.iter().find(|s| s.id == "a").and_then(|s| s.timestamp).unwrap();
    let b = snap.iter().find(|s| s.id == "b").and_then(|s| s.timestamp).unwrap();
    assert!(a < b);
}

#[test]
fn every_change_pushes_a_full_snapshot() {
    let coll = MemoryCollection::new();
    let mut rx = coll.subscribe();
    assert!(latest(&mut rx).is_empty());

    block_on(coll.write(shape("a"))).unwrap();
    assert_eq!(ids(&latest(&mut rx)), vec!["a"]);

    block_on(coll.write(shape("b"))).unwrap();
    assert_eq!(latest(&mut rx).len(), 2);

    block_on(coll.delete("a".to_owned())).unwrap();
    assert_eq!(ids(&latest(&mut rx)), vec!["b"]);
}

#[test]
fn rewrite_replaces_document_by_id() {
    let coll = MemoryCollection::new();
    block_on(coll.write(shape("a"))).unwrap();
    let mut again = shape("a");
    again.color = "#E53935".to_owned();
    block_on(coll.write(again)).unwrap();
    let mut rx = coll.subscribe();
    let snap = latest(&mut rx);
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].color, "#E53935");
}

#[test]
fn delete_of_missing_id_succeeds() {
    let coll = MemoryCollection::new();
    assert!(block_on(coll.delete("nope".to_owned())).is_ok());
    assert!(coll.is_empty());
}

#[test]
fn dropped_subscriber_is_pruned() {
    let coll = MemoryCollection::new();
    let rx = coll.subscribe();
    drop(rx);
    block_on(coll.write(shape("a"))).unwrap();
    assert_eq!(coll.len(), 1);
}

// =============================================================
// BoardSync
// =============================================================

#[test]
fn persist_writes_finished_shape() {
    let sync = BoardSync::new(MemoryCollection::new());
    assert!(block_on(sync.persist(shape("a"))));
    assert_eq!(sync.collection().len(), 1);
}

#[test]
fn failed_write_drops_shape_from_persisted_set() {
    let sync = BoardSync::new(FlakyCollection::new(&["bad"]));
    let mut rx = sync.subscribe();
    assert!(latest(&mut rx).is_empty());

    assert!(!block_on(sync.persist(shape("bad"))));
    assert!(block_on(sync.persist(shape("good"))));
    assert_eq!(ids(&latest(&mut rx)), vec!["good"]);
}

#[test]
fn clear_deletes_every_id() {
    let sync = BoardSync::new(MemoryCollection::new());
    for id in ["a", "b", "c"] {
        block_on(sync.persist(shape(id)));
    }
    let deleted = block_on(sync.clear(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]));
    assert_eq!(deleted, 3);
    assert!(sync.collection().is_empty());
}

#[test]
fn clear_failure_does_not_block_other_deletes() {
    let sync = BoardSync::new(FlakyCollection::new(&["stuck"]));
    block_on(sync.collection().inner.write(shape("stuck"))).unwrap();
    block_on(sync.persist(shape("a")));
    block_on(sync.persist(shape("b")));

    let deleted = block_on(sync.clear(vec!["a".to_owned(), "stuck".to_owned(), "b".to_owned()]));
    assert_eq!(deleted, 2);

    let mut rx = sync.subscribe();
    assert_eq!(ids(&latest(&mut rx)), vec!["stuck"]);
}

#[test]
fn apply_routes_engine_actions() {
    let sync = BoardSync::new(MemoryCollection::new());
    let mut core = EngineCore::new("alice");
    core.on_pointer_down(Point::new(0.0, 0.0), 7);
    for action in core.on_pointer_up() {
        block_on(sync.apply(action));
    }
    assert_eq!(sync.collection().len(), 1);

    let mut rx = sync.subscribe();
    core.load_snapshot(latest(&mut rx));
    for action in core.request_clear() {
        block_on(sync.apply(action));
    }
    assert!(sync.collection().is_empty());
}

// =============================================================
// Multi-author ordering
// =============================================================

#[test]
fn concurrent_authors_ordered_by_persisted_timestamp() {
    let board = MemoryCollection::new();
    let alice_sync = BoardSync::new(board.clone());
    let bob_sync = BoardSync::new(board.clone());
    let mut alice = EngineCore::new("alice");
    let mut bob = EngineCore::new("bob");
    bob.set_tool(Tool::Rectangle);

    // Bob starts drawing first, but Alice releases first.
    bob.on_pointer_down(Point::new(0.0, 0.0), 1_000);
    bob.on_pointer_move(Point::new(5.0, 5.0));
    alice.on_pointer_down(Point::new(9.0, 9.0), 2_000);
    for action in alice.on_pointer_up() {
        block_on(alice_sync.apply(action));
    }
    for action in bob.on_pointer_up() {
        block_on(bob_sync.apply(action));
    }

    let mut alice_rx = alice_sync.subscribe();
    let mut bob_rx = bob_sync.subscribe();
    alice.load_snapshot(latest(&mut alice_rx));
    bob.load_snapshot(latest(&mut bob_rx));

    let expected = vec!["alice-2000".to_owned(), "bob-1000".to_owned()];
    assert_eq!(alice.shapes.ids(), expected);
    assert_eq!(bob.shapes.ids(), expected);
}
