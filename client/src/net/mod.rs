//! Networking modules for HTTP + websocket shape feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST and auth-provider calls, `shape_feed` mirrors the
//! whiteboard's shape collection over a websocket, and `types` defines the
//! REST wire schema.

pub mod api;
pub mod shape_feed;
pub mod types;
