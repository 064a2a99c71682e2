//! In-memory directory backed by `DashMap` registries.

use async_trait::async_trait;
use dashmap::DashMap;

use chatgate_core::error::{GateError, Result};
use chatgate_core::model::{Channel, User};

use super::{ChannelDirectory, UserDirectory};

/// Concurrent in-memory user/channel registry. Used by the dev binary and
/// integration tests; unknown ids surface as lookup faults, not panics.
#[derive(Default)]
pub struct InMemoryDirectory {
    users: DashMap<String, User>,
    channels: DashMap<String, Channel>,
    /// channel id -> member user ids, in insertion order.
    members: DashMap<String, Vec<String>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn add_channel(&self, channel: Channel, member_ids: &[&str]) {
        self.members.insert(
            channel.id.clone(),
            member_ids.iter().map(|id| id.to_string()).collect(),
        );
        self.channels.insert(channel.id.clone(), channel);
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn get_user(&self, id: &str) -> Result<User> {
        self.users
            .get(id)
            .map(|u| u.value().clone())
            .ok_or_else(|| GateError::lookup("user", format!("unknown user id: {id}")))
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        if !self.users.contains_key(&user.id) {
            return Err(GateError::lookup(
                "user",
                format!("unknown user id: {}", user.id),
            ));
        }
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn users_in_channel(
        &self,
        channel_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<User>> {
        let ids = self
            .members
            .get(channel_id)
            .map(|m| m.value().clone())
            .ok_or_else(|| {
                GateError::lookup("channel", format!("unknown channel id: {channel_id}"))
            })?;

        let mut out = Vec::new();
        for id in ids.iter().skip(page * per_page).take(per_page) {
            if let Some(u) = self.users.get(id) {
                out.push(u.value().clone());
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl ChannelDirectory for InMemoryDirectory {
    async fn get_channel(&self, id: &str) -> Result<Channel> {
        self.channels
            .get(id)
            .map(|c| c.value().clone())
            .ok_or_else(|| GateError::lookup("channel", format!("unknown channel id: {id}")))
    }
}
