//! WebSocket-backed shape collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whiteboard's persisted shapes live in a remote document collection
//! reached over a WebSocket. Frames are JSON text tagged by `op`:
//!
//! - client → server: `listen {path}`, `set {path, doc}`, `delete {path, id}`
//! - server → client: `snapshot {path, docs}` after every change, `error {message}`
//!
//! The server stamps each document's timestamp and pushes the full set, so
//! this side never merges.
//!
//! ERROR HANDLING
//! ==============
//! A write or delete succeeds once it is queued on the socket; rejections
//! come back as `error` frames and are logged. When the socket closes every
//! live query ends. There is no reconnect.
//!
//! LIFECYCLE
//! =========
//! The reader task keeps its own clone of the collection, so dropping the
//! host's handle never ends the connection. The host calls
//! [`FeedCloser::close`] on unmount: the outbox channel closes for every
//! sender, the writer drains and closes the socket, and the reader is aborted.

#[cfg(test)]
#[path = "shape_feed_test.rs"]
mod shape_feed_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use canvas::doc::{Shape, ShapeId};
use canvas::sync::{MemoryCollection, ShapeCollection, Snapshots, SyncError};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future::{self, AbortHandle, Either};
use serde::{Deserialize, Serialize};

/// One JSON frame on the shape feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum FeedMessage {
    Listen { path: String },
    Set { path: String, doc: Shape },
    Delete { path: String, id: ShapeId },
    Snapshot { path: String, docs: Vec<Shape> },
    Error { message: String },
}

/// Shape collection mirrored from a shape-feed connection.
///
/// Outbound frames go to an outbox channel drained by the socket writer;
/// inbound frames are handed to [`FeedCollection::deliver`].
#[derive(Clone)]
pub struct FeedCollection {
    path: String,
    outbox: UnboundedSender<String>,
    subscribers: Rc<RefCell<Vec<UnboundedSender<Vec<Shape>>>>>,
    reader: Option<AbortHandle>,
}

/// Shuts a feed connection down. `Send`, so it can live in `on_cleanup`.
#[derive(Clone, Debug)]
pub struct FeedCloser {
    outbox: UnboundedSender<String>,
    reader: Option<AbortHandle>,
}

impl FeedCloser {
    /// Close the outbox for every sender and stop the reader task.
    /// Frames already queued are still flushed by the writer.
    pub fn close(&self) {
        self.outbox.close_channel();
        if let Some(reader) = &self.reader {
            reader.abort();
        }
        log::debug!("shape feed close requested");
    }
}

impl FeedCollection {
    /// Create a collection for `path` plus the receiving end of its outbox.
    #[must_use]
    pub fn new(path: impl Into<String>) -> (Self, UnboundedReceiver<String>) {
        let (outbox, rx) = mpsc::unbounded();
        let feed = Self { path: path.into(), outbox, subscribers: Rc::new(RefCell::new(Vec::new())), reader: None };
        (feed, rx)
    }

    #[must_use]
    pub fn closer(&self) -> FeedCloser {
        FeedCloser { outbox: self.outbox.clone(), reader: self.reader.clone() }
    }

    fn send(&self, message: &FeedMessage) -> Result<(), String> {
        let text = serde_json::to_string(message).map_err(|e| e.to_string())?;
        self.outbox
            .unbounded_send(text)
            .map_err(|_| "shape feed is closed".to_owned())
    }

    /// Handle one inbound text frame.
    pub fn deliver(&self, text: &str) {
        match serde_json::from_str::<FeedMessage>(text) {
            Ok(FeedMessage::Snapshot { path, docs }) if path == self.path => {
                log::debug!("shape feed snapshot: {} docs", docs.len());
                self.subscribers
                    .borrow_mut()
                    .retain(|tx| tx.unbounded_send(docs.clone()).is_ok());
            }
            Ok(FeedMessage::Snapshot { path, .. }) => {
                log::debug!("ignoring snapshot for {path}");
            }
            Ok(FeedMessage::Error { message }) => {
                log::warn!("shape feed error: {message}");
            }
            Ok(other) => {
                log::debug!("ignoring client-bound frame: {other:?}");
            }
            Err(e) => {
                log::warn!("undecodable shape feed frame: {e}");
            }
        }
    }

    /// End every live query. Called when the socket closes.
    pub fn disconnect(&self) {
        self.subscribers.borrow_mut().clear();
    }

    /// Open a WebSocket to `url` and mirror the collection at `path`.
    ///
    /// # Errors
    ///
    /// `Unavailable` if the socket cannot be created.
    #[cfg(feature = "csr")]
    pub fn connect(url: &str, path: &str) -> Result<Self, SyncError> {
        use futures::future::Abortable;
        use futures::{SinkExt, StreamExt};
        use gloo_net::websocket::Message;
        use gloo_net::websocket::futures::WebSocket;

        let ws = WebSocket::open(url).map_err(|e| SyncError::Unavailable(e.to_string()))?;
        let (mut ws_write, mut ws_read) = ws.split();
        let (mut feed, mut outbox) = Self::new(path);
        let (reader, registration) = AbortHandle::new_pair();
        feed.reader = Some(reader);

        leptos::task::spawn_local(async move {
            while let Some(text) = outbox.next().await {
                if let Err(e) = ws_write.send(Message::Text(text)).await {
                    log::warn!("shape feed send failed: {e}");
                    break;
                }
            }
            if let Err(e) = ws_write.close().await {
                log::debug!("shape feed close failed: {e}");
            }
        });

        let inbound = feed.clone();
        leptos::task::spawn_local(async move {
            let pump = async {
                while let Some(msg) = ws_read.next().await {
                    match msg {
                        Ok(Message::Text(text)) => inbound.deliver(&text),
                        Ok(Message::Bytes(_)) => log::debug!("ignoring binary shape feed frame"),
                        Err(e) => {
                            log::warn!("shape feed recv error: {e}");
                            break;
                        }
                    }
                }
            };
            if Abortable::new(pump, registration).await.is_err() {
                log::debug!("shape feed reader stopped");
            }
            log::info!("shape feed closed");
            inbound.disconnect();
        });

        log::info!("shape feed connected to {url}");
        Ok(feed)
    }
}

impl ShapeCollection for FeedCollection {
    fn write(&self, shape: Shape) -> impl Future<Output = Result<(), SyncError>> {
        let id = shape.id.clone();
        let message = FeedMessage::Set { path: self.path.clone(), doc: shape };
        future::ready(self.send(&message).map_err(|reason| SyncError::Write { id, reason }))
    }

    fn delete(&self, id: ShapeId) -> impl Future<Output = Result<(), SyncError>> {
        let message = FeedMessage::Delete { path: self.path.clone(), id: id.clone() };
        future::ready(self.send(&message).map_err(|reason| SyncError::Delete { id, reason }))
    }

    fn subscribe(&self) -> Snapshots {
        let (tx, rx) = mpsc::unbounded();
        match self.send(&FeedMessage::Listen { path: self.path.clone() }) {
            Ok(()) => self.subscribers.borrow_mut().push(tx),
            Err(e) => log::warn!("cannot listen on {}: {e}", self.path),
        }
        rx
    }
}

/// Where the whiteboard keeps its shapes.
#[derive(Clone)]
pub enum BoardBackend {
    /// In-process only; nothing leaves this tab.
    Local(MemoryCollection),
    /// Shared with every client on the same feed path.
    Remote(FeedCollection),
}

impl BoardBackend {
    /// Remote if a feed URL is given and the socket opens, local otherwise.
    #[must_use]
    pub fn from_feed_url(url: Option<&str>, path: &str) -> Self {
        #[cfg(feature = "csr")]
        {
            if let Some(url) = url {
                match FeedCollection::connect(url, path) {
                    Ok(feed) => return Self::Remote(feed),
                    Err(e) => log::warn!("falling back to a local board: {e}"),
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = (url, path);
        Self::Local(MemoryCollection::new())
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Shutdown handle for a remote board; a local board holds no socket.
    #[must_use]
    pub fn closer(&self) -> Option<FeedCloser> {
        match self {
            Self::Local(_) => None,
            Self::Remote(feed) => Some(feed.closer()),
        }
    }
}

impl ShapeCollection for BoardBackend {
    fn write(&self, shape: Shape) -> impl Future<Output = Result<(), SyncError>> {
        match self {
            Self::Local(c) => Either::Left(c.write(shape)),
            Self::Remote(c) => Either::Right(c.write(shape)),
        }
    }

    fn delete(&self, id: ShapeId) -> impl Future<Output = Result<(), SyncError>> {
        match self {
            Self::Local(c) => Either::Left(c.delete(id)),
            Self::Remote(c) => Either::Right(c.delete(id)),
        }
    }

    fn subscribe(&self) -> Snapshots {
        match self {
            Self::Local(c) => c.subscribe(),
            Self::Remote(c) => c.subscribe(),
        }
    }
}
