//! Client view-state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs with transition methods, wrapped in `RwSignal`s by pages and
//! `App`. Keeping them signal-free lets every transition be unit tested.

pub mod auth;
pub mod booking;
pub mod marketplace;
pub mod whiteboard;
