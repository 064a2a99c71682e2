//! Host-platform data model consumed by the decision engine.
//!
//! `User` and `Channel` are snapshots of externally owned records; the core
//! never fetches or stores them itself. Per-user preference flags live as
//! opaque string props on the user record (`"true"` sentinel = disabled).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Prop key for the DM opt-out flag.
pub const PROP_DISABLE_DIRECT_MESSAGE: &str = "disable_direct_message";
/// Prop key for the GM opt-out flag.
pub const PROP_DISABLE_GROUP_MESSAGE: &str = "disable_group_message";
/// Sentinel prop value meaning "disabled".
pub const PROP_TRUE: &str = "true";

/// Snapshot of a user record owned by the host platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Role names held by the user (many-valued).
    #[serde(default)]
    pub roles: Vec<String>,
    /// Opaque string-keyed properties; preference flags live here.
    #[serde(default)]
    pub props: HashMap<String, String>,
}

impl User {
    pub fn is_in_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    pub fn set_prop(&mut self, key: &str, value: &str) {
        self.props.insert(key.to_string(), value.to_string());
    }
}

/// Channel classification; the policy only constrains `Direct` and `Group`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Two-participant private channel.
    Direct,
    /// Private channel with more than two participants.
    Group,
    /// Anything else (public, broadcast, ...); never restricted.
    Other,
}

/// Snapshot of a channel record owned by the host platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub kind: ChannelKind,
}

/// A candidate message post handed to interception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub user_id: String,
    pub channel_id: String,
    pub message: String,
}

/// Outcome of a policy decision. Ephemeral, produced per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub allowed: bool,
    /// Human-readable denial reason; empty when allowed.
    pub reason: String,
}

impl Verdict {
    pub fn allow() -> Self {
        Verdict {
            allowed: true,
            reason: String::new(),
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Verdict {
            allowed: false,
            reason: reason.into(),
        }
    }
}
