//! chatGate core: platform-agnostic policy primitives, data model, and error types.
//!
//! This crate defines the message-restriction decision engine and its inputs:
//! the user/channel model, the replace-only `PolicyConfig`, and the
//! `ConfigStore` holding the active snapshot. It intentionally carries no
//! transport or runtime dependencies so it can be embedded in any host
//! platform integration.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `GateError`/`Result`. The single
//! exception is `ConfigStore::replace`, whose contract violation is a
//! programming error and aborts via a narrowly scoped `#[allow]`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod policy;

/// Shared result type.
pub use error::{GateError, Result};
