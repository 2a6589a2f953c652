//! pwPolicy core: the password-policy wire codec, policy catalog types, and
//! the shared error surface.
//!
//! This crate owns the flat `id(value) and id(value)` policy string format
//! used by the realm representation and the typed rows an editor works on.
//! It carries no transport or runtime dependencies so it can be reused by the
//! console service, tests, and tooling alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The codec is total: malformed input degrades to omission instead of an
//! error, and everything else surfaces as `PolicyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{PolicyError, Result};
