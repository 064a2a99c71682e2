//! Member-join defaulting.

use chatgate_core::model::User;
use chatgate_core::policy::engine;

use crate::app_state::AppState;

/// Apply the configured on-join opt-out defaults to a newly joined user and
/// persist the mutated record. A persistence failure is logged and does not
/// abort the join; the next policy decision simply sees the unstamped props.
pub async fn user_has_joined(state: &AppState, user: &mut User) {
    let cfg = state.config().read();

    engine::default_join_preferences(&cfg, user);

    if let Err(e) = state.users().update_user(user).await {
        tracing::error!(user_id = %user.id, error = %e, "failed to persist join preferences");
    }
}
