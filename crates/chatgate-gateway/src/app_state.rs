//! Shared application state for the chatGate gateway.

use std::sync::Arc;

use chatgate_core::error::Result;
use chatgate_core::policy::{ConfigStore, PolicyConfig};

use crate::config;
use crate::directory::{ChannelDirectory, UserDirectory};

/// Cheaply cloneable handle shared by hooks, router, and host integration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ConfigStore,
    users: Arc<dyn UserDirectory>,
    channels: Arc<dyn ChannelDirectory>,
}

impl AppState {
    /// Build application state around the host platform's directories. The
    /// config store starts unset and reads as the all-defaults policy until
    /// the first [`AppState::apply_settings`].
    pub fn new(users: Arc<dyn UserDirectory>, channels: Arc<dyn ChannelDirectory>) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                config: ConfigStore::new(),
                users,
                channels,
            }),
        }
    }

    /// Configuration-change entry point: parse the raw document supplied by
    /// the external source and atomically swap it in. A parse failure leaves
    /// the active snapshot untouched.
    pub fn apply_settings(&self, raw: &str) -> Result<()> {
        let cfg: PolicyConfig = config::load_from_str(raw)?;
        self.inner.config.replace(Arc::new(cfg));
        Ok(())
    }

    pub fn config(&self) -> &ConfigStore {
        &self.inner.config
    }

    pub fn users(&self) -> &dyn UserDirectory {
        self.inner.users.as_ref()
    }

    pub fn channels(&self) -> &dyn ChannelDirectory {
        self.inner.channels.as_ref()
    }
}
