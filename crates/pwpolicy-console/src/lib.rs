//! pwPolicy console library entry.
//!
//! Wires config, the realm store, the policy editor, and the HTTP API into a
//! small realm-settings service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod editor;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
