//! Page-owned state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain Rust with no browser dependency. Pages wrap these
//! models in `RwSignal`s and drive them from event handlers, so the edit rules
//! are unit tested natively.

pub mod auth;
pub mod field_editor;
pub mod image_set;
pub mod item_form;
pub mod notify;
pub mod password_reset;
pub mod penalty;
pub mod profile;
pub mod rental;
