//! chatGate gateway library entry.
//!
//! This crate wires the policy core into a host chat platform: strict config
//! loading, the user/channel directory seams, the three trigger hooks
//! (message post, member join, restrictions query), and the axum router. It
//! is intended to be consumed by the binary (`main.rs`), by a platform
//! integration, and by integration tests.

pub mod app_state;
pub mod config;
pub mod directory;
pub mod hooks;
pub mod router;
