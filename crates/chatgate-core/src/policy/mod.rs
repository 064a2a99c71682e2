//! Policy layer (configuration snapshot + decision rules).
//!
//! `config` holds the replace-only `PolicyConfig` and the store that
//! serializes reads against concurrent replacement; `engine` is the pure
//! rule set the trigger points evaluate against a snapshot.

pub mod config;
pub mod engine;

pub use config::{ConfigStore, PolicyConfig};
