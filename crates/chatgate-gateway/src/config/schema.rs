use serde::Deserialize;

use chatgate_core::policy::PolicyConfig;

/// Raw policy settings as supplied by the external configuration source.
/// Field names are the wire contract; parsing is strict so a typo in an
/// admin-edited file fails loudly instead of silently relaxing policy.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySettings {
    #[serde(default)]
    pub disable_dm_on_join: bool,

    #[serde(default)]
    pub disable_gm_on_join: bool,

    #[serde(default)]
    pub disable_dm_for_existing_user: bool,

    #[serde(default)]
    pub disable_gm_for_existing_user: bool,

    /// Usernames exempt from all restrictions (ordered on the wire, a set
    /// in the compiled config).
    #[serde(default)]
    pub excluded_users: Vec<String>,

    /// Role names that always bypass restrictions.
    #[serde(default)]
    pub allowed_roles: Vec<String>,
}

impl From<PolicySettings> for PolicyConfig {
    fn from(s: PolicySettings) -> Self {
        PolicyConfig {
            disable_dm_on_join: s.disable_dm_on_join,
            disable_gm_on_join: s.disable_gm_on_join,
            disable_dm_for_existing_user: s.disable_dm_for_existing_user,
            disable_gm_for_existing_user: s.disable_gm_for_existing_user,
            excluded_users: s.excluded_users.into_iter().collect(),
            allowed_roles: s.allowed_roles.into_iter().collect(),
        }
    }
}
