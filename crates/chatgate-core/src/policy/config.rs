//! Replace-only policy configuration and its concurrent store.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

/// The active policy settings. A published instance is never mutated in
/// place; reconfiguration swaps the whole object via [`ConfigStore::replace`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Stamp the DM opt-out prop on newly joined users.
    pub disable_dm_on_join: bool,
    /// Stamp the GM opt-out prop on newly joined users.
    pub disable_gm_on_join: bool,
    /// Override mode: ignore per-user DM preference, role exemption is the
    /// only path to permission.
    pub disable_dm_for_existing_user: bool,
    /// Override mode for group messages.
    pub disable_gm_for_existing_user: bool,
    /// Usernames exempt from every restriction check (case-sensitive).
    pub excluded_users: BTreeSet<String>,
    /// Role names that always bypass restrictions.
    pub allowed_roles: BTreeSet<String>,
}

impl PolicyConfig {
    /// Value-equal to the all-defaults instance.
    pub fn is_empty(&self) -> bool {
        *self == PolicyConfig::default()
    }
}

/// Tri-state slot distinguishing "never configured" from "explicitly reset
/// to empty" without inspecting the config structurally.
#[derive(Debug)]
enum Slot {
    Unset,
    Default(Arc<PolicyConfig>),
    Explicit(Arc<PolicyConfig>),
}

impl Slot {
    fn active(&self) -> Option<&Arc<PolicyConfig>> {
        match self {
            Slot::Unset => None,
            Slot::Default(cfg) | Slot::Explicit(cfg) => Some(cfg),
        }
    }
}

/// Holds the single current [`PolicyConfig`] and serializes reads against
/// concurrent replacement. Readers clone under the read lock and never
/// observe a partial update; the writer holds the write lock for the swap
/// only, never across I/O.
#[derive(Debug)]
pub struct ConfigStore {
    slot: RwLock<Slot>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        ConfigStore {
            slot: RwLock::new(Slot::Unset),
        }
    }

    /// Deep, independent copy of the current snapshot. Before any
    /// `replace`, yields the all-defaults config.
    ///
    /// A poisoned lock (the misuse panic in `replace` fires while the write
    /// guard is held) does not discard the active snapshot: the swap is a
    /// single assignment and can never be torn, so the slot stays
    /// consistent and keeps serving. Falling back to the all-defaults
    /// config here would silently lift every restriction.
    pub fn read(&self) -> PolicyConfig {
        let slot = match self.slot.read() {
            Ok(slot) => slot,
            Err(poisoned) => {
                tracing::warn!("config store lock poisoned, serving intact snapshot");
                poisoned.into_inner()
            }
        };
        slot.active()
            .map(|cfg| cfg.as_ref().clone())
            .unwrap_or_default()
    }

    /// Atomically swap in a new snapshot.
    ///
    /// # Panics
    /// Calling this with the exact `Arc` instance already active, while that
    /// instance is non-empty, is a programming error (accidental
    /// self-replacement) and aborts. A pointer-identical empty replace is a
    /// no-op; replacing with any distinct instance is always legal.
    #[allow(clippy::panic)]
    pub fn replace(&self, config: Arc<PolicyConfig>) {
        let mut slot = self
            .slot
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(active) = slot.active() {
            if Arc::ptr_eq(active, &config) {
                if config.is_empty() {
                    return;
                }
                panic!("ConfigStore::replace called with the active configuration");
            }
        }

        *slot = if config.is_empty() {
            Slot::Default(config)
        } else {
            Slot::Explicit(config)
        };
    }
}
