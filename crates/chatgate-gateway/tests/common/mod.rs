#![allow(dead_code)]

use std::sync::Arc;

use chatgate_core::model::{Channel, ChannelKind, Post, User};
use chatgate_gateway::app_state::AppState;
use chatgate_gateway::directory::InMemoryDirectory;

/// App state over a fresh in-memory directory; configure via
/// `TestEnv::apply` and seed records through `dir`.
pub struct TestEnv {
    pub state: AppState,
    pub dir: Arc<InMemoryDirectory>,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = Arc::new(InMemoryDirectory::new());
        let state = AppState::new(dir.clone(), dir.clone());
        TestEnv { state, dir }
    }

    pub fn apply(&self, yaml: &str) {
        self.state.apply_settings(yaml).expect("settings must parse");
    }

    pub fn add_user(&self, id: &str, username: &str, roles: &[&str]) -> User {
        let user = User {
            id: id.to_string(),
            username: username.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            props: Default::default(),
        };
        self.dir.add_user(user.clone());
        user
    }

    pub fn add_dm_channel(&self, id: &str, members: &[&str]) {
        self.dir.add_channel(
            Channel {
                id: id.to_string(),
                kind: ChannelKind::Direct,
            },
            members,
        );
    }

    pub fn add_channel(&self, id: &str, kind: ChannelKind, members: &[&str]) {
        self.dir.add_channel(
            Channel {
                id: id.to_string(),
                kind,
            },
            members,
        );
    }
}

pub fn post(user_id: &str, channel_id: &str) -> Post {
    Post {
        user_id: user_id.to_string(),
        channel_id: channel_id.to_string(),
        message: "hello".to_string(),
    }
}
