//! Remote collection seam: where persisted shapes live.
//!
//! The remote collection is the source of truth for every shape except the
//! draft under construction. It offers three operations keyed by shape id:
//! write, delete, and a live query that pushes the full shape set on every
//! change. Conflict resolution across authors belongs to the collection's
//! backend; nothing here merges or reorders beyond timestamp sorting.
//!
//! ERROR HANDLING
//! ==============
//! `BoardSync` never surfaces failures to the caller. A failed write is
//! logged and the shape is dropped (it was never in the persisted set). A
//! failed delete during clear-all is logged and the remaining deletes carry
//! on; there is no rollback.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future;

use crate::doc::{Shape, ShapeId};
use crate::engine::Action;

/// Errors reported by a [`ShapeCollection`].
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("write of {id} failed: {reason}")]
    Write { id: ShapeId, reason: String },
    #[error("delete of {id} failed: {reason}")]
    Delete { id: ShapeId, reason: String },
    #[error("collection unavailable: {0}")]
    Unavailable(String),
}

/// Stream of full shape-set snapshots from a live query.
pub type Snapshots = UnboundedReceiver<Vec<Shape>>;

/// A remote, shared collection of shape documents.
pub trait ShapeCollection {
    /// Write `shape` under its id. The collection assigns the timestamp.
    fn write(&self, shape: Shape) -> impl Future<Output = Result<(), SyncError>>;

    /// Delete the document with `id`.
    fn delete(&self, id: ShapeId) -> impl Future<Output = Result<(), SyncError>>;

    /// Open a live query over the whole collection. The current set is
    /// delivered first, then a fresh snapshot after every change.
    fn subscribe(&self) -> Snapshots;
}

/// Dispatches engine actions to a shape collection.
pub struct BoardSync<C> {
    collection: C,
}

impl<C: ShapeCollection> BoardSync<C> {
    #[must_use]
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    #[must_use]
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Open the live query that feeds `EngineCore::load_snapshot`.
    #[must_use]
    pub fn subscribe(&self) -> Snapshots {
        self.collection.subscribe()
    }

    /// Write a finished shape. Returns `false` (after logging) if the write
    /// failed; the shape is not retried.
    pub async fn persist(&self, shape: Shape) -> bool {
        let id = shape.id.clone();
        let kind = shape.kind();
        match self.collection.write(shape).await {
            Ok(()) => {
                log::debug!("{kind:?} {id} persisted");
                true
            }
            Err(e) => {
                log::warn!("dropping shape {id}: {e}");
                false
            }
        }
    }

    /// Delete every id independently. Returns the number of deletes that
    /// succeeded; failures are logged and do not stop the others.
    pub async fn clear(&self, ids: Vec<ShapeId>) -> usize {
        let deletes = ids.into_iter().map(|id| async move {
            match self.collection.delete(id.clone()).await {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("clear: could not delete {id}: {e}");
                    false
                }
            }
        });
        future::join_all(deletes).await.into_iter().filter(|ok| *ok).count()
    }

    /// Carry out the remote side of one engine action. Render requests are
    /// the host's concern and are ignored here.
    pub async fn apply(&self, action: Action) {
        match action {
            Action::ShapeFinished(shape) => {
                self.persist(shape).await;
            }
            Action::ClearRequested { ids } => {
                let total = ids.len();
                let deleted = self.clear(ids).await;
                log::info!("cleared {deleted}/{total} shapes");
            }
            Action::RenderNeeded => {}
        }
    }
}

/// In-process shape collection.
///
/// Stamps each write with the next value of a logical clock and pushes the
/// full set to every live subscriber after each change. Clones share state,
/// so several engines can draw on one board.
#[derive(Clone, Default)]
pub struct MemoryCollection {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    docs: BTreeMap<ShapeId, Shape>,
    clock: i64,
    subscribers: Vec<UnboundedSender<Vec<Shape>>>,
}

impl MemoryInner {
    fn snapshot(&self) -> Vec<Shape> {
        self.docs.values().cloned().collect()
    }

    fn broadcast(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers
            .retain(|tx| tx.unbounded_send(snapshot.clone()).is_ok());
    }
}

impl MemoryCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().docs.len()
    }

    /// Returns `true` if no documents are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().docs.is_empty()
    }
}

impl ShapeCollection for MemoryCollection {
    fn write(&self, mut shape: Shape) -> impl Future<Output = Result<(), SyncError>> {
        let mut inner = self.inner.borrow_mut();
        inner.clock += 1;
        shape.timestamp = Some(inner.clock);
        inner.docs.insert(shape.id.clone(), shape);
        inner.broadcast();
        future::ready(Ok(()))
    }

    fn delete(&self, id: ShapeId) -> impl Future<Output = Result<(), SyncError>> {
        let mut inner = self.inner.borrow_mut();
        if inner.docs.remove(&id).is_some() {
            inner.broadcast();
        }
        future::ready(Ok(()))
    }

    fn subscribe(&self) -> Snapshots {
        let (tx, rx) = mpsc::unbounded();
        let mut inner = self.inner.borrow_mut();
        if tx.unbounded_send(inner.snapshot()).is_ok() {
            inner.subscribers.push(tx);
        }
        rx
    }
}
