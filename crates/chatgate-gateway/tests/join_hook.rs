#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use chatgate_core::model::{User, PROP_DISABLE_DIRECT_MESSAGE, PROP_DISABLE_GROUP_MESSAGE};
use chatgate_gateway::directory::UserDirectory;
use chatgate_gateway::hooks::user_has_joined;

use common::TestEnv;

#[tokio::test]
async fn join_stamps_and_persists_configured_defaults() {
    let env = TestEnv::new();
    env.apply(
        r#"
disable_dm_on_join: true
disable_gm_on_join: true
"#,
    );
    let mut user = env.add_user("u1", "newbie", &["system_user"]);

    user_has_joined(&env.state, &mut user).await;

    assert_eq!(user.prop(PROP_DISABLE_DIRECT_MESSAGE), Some("true"));
    assert_eq!(user.prop(PROP_DISABLE_GROUP_MESSAGE), Some("true"));

    // The stamped props reached the directory, not just the local copy.
    let stored = env.dir.get_user("u1").await.unwrap();
    assert_eq!(stored.prop(PROP_DISABLE_DIRECT_MESSAGE), Some("true"));
    assert_eq!(stored.prop(PROP_DISABLE_GROUP_MESSAGE), Some("true"));
}

#[tokio::test]
async fn join_with_default_config_leaves_props_alone() {
    let env = TestEnv::new();
    let mut user = env.add_user("u1", "newbie", &[]);

    user_has_joined(&env.state, &mut user).await;

    assert!(user.props.is_empty());
}

#[tokio::test]
async fn join_persistence_failure_does_not_abort() {
    let env = TestEnv::new();
    env.apply("disable_dm_on_join: true");

    // A user the directory has never seen: update_user fails, the hook
    // logs and returns, and the local record still carries the default.
    let mut ghost = User {
        id: "ghost".to_string(),
        username: "ghost".to_string(),
        roles: vec![],
        props: Default::default(),
    };

    user_has_joined(&env.state, &mut ghost).await;

    assert_eq!(ghost.prop(PROP_DISABLE_DIRECT_MESSAGE), Some("true"));
}
