//! Shared error type across chatGate crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, GateError>;

/// Unified error type used by core and gateway.
///
/// A policy denial is NOT an error: it is a normal [`crate::model::Verdict`]
/// with `allowed == false`. These variants cover faults only.
#[derive(Debug, Error)]
pub enum GateError {
    /// Malformed or unavailable configuration source.
    #[error("invalid configuration: {0}")]
    BadConfig(String),
    /// A user/channel/peer lookup against the host platform failed.
    /// `subject` identifies which lookup (e.g. "channel", "sender",
    /// "recipient") so the fault is attributable.
    #[error("failed to get {subject}: {detail}")]
    Lookup { subject: String, detail: String },
    /// Internal invariant violation.
    #[error("internal: {0}")]
    Internal(String),
}

impl GateError {
    /// Build a lookup fault for the named subject.
    pub fn lookup(subject: &str, detail: impl std::fmt::Display) -> Self {
        GateError::Lookup {
            subject: subject.to_string(),
            detail: detail.to_string(),
        }
    }
}
