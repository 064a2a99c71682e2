//! Directory seams for the host platform's user and channel storage.
//!
//! The gate owns no records of its own; every lookup and write goes through
//! these traits. A real deployment implements them against the platform API,
//! tests and the dev binary use [`memory::InMemoryDirectory`].

pub mod memory;

use async_trait::async_trait;

use chatgate_core::error::Result;
use chatgate_core::model::{Channel, User};

pub use memory::InMemoryDirectory;

/// User record storage owned by the host platform.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<User>;
    async fn update_user(&self, user: &User) -> Result<()>;
    /// Page through the members of a channel.
    async fn users_in_channel(
        &self,
        channel_id: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<User>>;
}

/// Channel record storage owned by the host platform.
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    async fn get_channel(&self, id: &str) -> Result<Channel>;
}
