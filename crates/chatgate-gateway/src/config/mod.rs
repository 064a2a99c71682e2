//! Policy config loader (strict parsing).
//!
//! The external configuration source hands us a YAML document; any parse
//! failure is a configuration fault surfaced to the caller of the load step,
//! never a silent fallback. The decision engine itself is never invoked with
//! a missing configuration: an untouched store reads as the all-defaults
//! snapshot.

pub mod schema;

use std::fs;

use chatgate_core::error::{GateError, Result};
use chatgate_core::policy::PolicyConfig;

pub use schema::PolicySettings;

pub fn load_from_file(path: &str) -> Result<PolicyConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GateError::BadConfig(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PolicyConfig> {
    let settings: PolicySettings = serde_yaml::from_str(s)
        .map_err(|e| GateError::BadConfig(format!("invalid yaml: {e}")))?;
    Ok(settings.into())
}
