//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure renderers of page state plus the canvas host bridge.
//! They receive data and callbacks as props and read session/config from
//! Leptos context providers.

pub mod auth_bar;
pub mod booking_modal;
pub mod canvas_host;
pub mod professional_card;
pub mod professional_detail;
pub mod professional_list;
pub mod toolbar;
