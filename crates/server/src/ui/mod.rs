//! Server-rendered HTML.
//!
//! Every renderer takes the request's `SessionContext` explicitly; nothing here
//! reads global state.

pub mod deals;
pub mod icons;
pub mod layout;
pub mod permission;
pub mod sidebar;
