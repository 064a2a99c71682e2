//! Decision rules: pure functions over (config snapshot, user record).
//!
//! Each rule is an ordered two-step check: the override-for-existing flag is
//! consulted first (it suppresses the per-user preference entirely), then the
//! preference-or-role-exemption disjunction. The precedence is a policy
//! decision, kept explicit here rather than buried in expression order.

use crate::model::{
    User, PROP_DISABLE_DIRECT_MESSAGE, PROP_DISABLE_GROUP_MESSAGE, PROP_TRUE,
};

use super::config::PolicyConfig;

/// True iff the exemption role set is non-empty and the user holds at least
/// one configured role. Order-independent set-intersection test.
pub fn allowed_by_role(config: &PolicyConfig, user: &User) -> bool {
    config.allowed_roles.iter().any(|role| user.is_in_role(role))
}

/// True iff the username exactly matches an excluded-users entry
/// (case-sensitive).
pub fn is_excluded(config: &PolicyConfig, username: &str) -> bool {
    config.excluded_users.contains(username)
}

/// May this user initiate a direct message?
pub fn can_send_direct(config: &PolicyConfig, user: &User) -> bool {
    if config.disable_dm_for_existing_user {
        return allowed_by_role(config, user);
    }
    user.prop(PROP_DISABLE_DIRECT_MESSAGE) != Some(PROP_TRUE) || allowed_by_role(config, user)
}

/// May this user receive a direct message? The DM opt-out flag is symmetric:
/// it governs both initiating and receiving, so this is the sender rule
/// evaluated against the recipient.
pub fn can_receive_direct(config: &PolicyConfig, user: &User) -> bool {
    can_send_direct(config, user)
}

/// May this user participate in a group message channel?
pub fn can_send_group(config: &PolicyConfig, user: &User) -> bool {
    if config.disable_gm_for_existing_user {
        return allowed_by_role(config, user);
    }
    user.prop(PROP_DISABLE_GROUP_MESSAGE) != Some(PROP_TRUE) || allowed_by_role(config, user)
}

/// On-join defaulting: stamp the opt-out props the admin policy asks for.
/// Stamps unconditionally, overwriting any prior value; a one-way
/// initialization, not a decision.
pub fn default_join_preferences(config: &PolicyConfig, user: &mut User) {
    if config.disable_dm_on_join {
        user.set_prop(PROP_DISABLE_DIRECT_MESSAGE, PROP_TRUE);
    }
    if config.disable_gm_on_join {
        user.set_prop(PROP_DISABLE_GROUP_MESSAGE, PROP_TRUE);
    }
}
