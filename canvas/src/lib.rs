//! Canvas drawing model for the shared whiteboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It turns
//! pointer gestures into drawable shapes, keeps the persisted shape set that
//! the remote collection pushes down, and rasterizes both onto a 2D canvas.
//! The host UI layer wires DOM events to the engine and hands the resulting
//! [`engine::Action`]s to [`sync::BoardSync`], which talks to the remote
//! collection.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Shape types and the persisted shape store |
//! | [`input`] | Tools, colors, and the gesture state machine |
//! | [`render`] | Draw-list construction and 2D rasterization |
//! | [`sync`] | Remote collection seam and action dispatch |
//! | [`consts`] | Shared numeric constants (stroke width, palette) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod input;
pub mod render;
pub mod sync;
