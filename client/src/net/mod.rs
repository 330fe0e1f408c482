//! Networking modules for the rental REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sync` defines the adapter contract that edit flows depend on, `api`
//! implements it (and the one-off calls) over `gloo-net`, `error` classifies
//! failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod sync;
pub mod types;
