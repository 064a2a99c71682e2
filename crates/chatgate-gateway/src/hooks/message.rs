//! Message-post interception.

use chatgate_core::error::{GateError, Result};
use chatgate_core::model::{Channel, ChannelKind, Post, User, Verdict};
use chatgate_core::policy::engine;

use crate::app_state::AppState;

/// Denial reason shown to a sender whose DM sending is restricted.
pub const REASON_SEND_DM: &str = "You are not allowed to send direct messages.";
/// Denial reason shown when the other participant's DM receiving is restricted.
pub const REASON_RECEIVE_DM: &str = "The recipient is not allowed to receive direct messages.";
/// Denial reason shown to a sender whose group-message participation is restricted.
pub const REASON_SEND_GM: &str = "You are not allowed to participate in group messages.";

/// Result of intercepting a candidate post. A lookup fault is not an
/// outcome: it propagates as `Err` so the transport can surface a generic
/// failure, distinct from a policy denial.
#[derive(Debug, Clone, PartialEq)]
pub enum PostOutcome {
    /// Let the post through unchanged.
    Allow(Post),
    /// Block the post; the reason string is surfaced to the sender.
    Reject(String),
}

/// Gate a candidate post: either the unmodified post or a rejection carrying
/// the verdict's denial reason.
pub async fn message_will_be_posted(state: &AppState, post: Post) -> Result<PostOutcome> {
    let verdict = evaluate_message_post(state, &post).await?;
    if verdict.allowed {
        Ok(PostOutcome::Allow(post))
    } else {
        Ok(PostOutcome::Reject(verdict.reason))
    }
}

/// Evaluate a candidate post against the current policy snapshot.
///
/// One snapshot is read up front and used for every check, so a concurrent
/// configuration replacement can never produce a mixed decision.
pub async fn evaluate_message_post(state: &AppState, post: &Post) -> Result<Verdict> {
    let cfg = state.config().read();

    let channel = state
        .channels()
        .get_channel(&post.channel_id)
        .await
        .map_err(|e| relabel("channel", e))?;

    let sender = state
        .users()
        .get_user(&post.user_id)
        .await
        .map_err(|e| relabel("sender", e))?;

    // Exclusion bypasses every other check, group restrictions included.
    if engine::is_excluded(&cfg, &sender.username) {
        return Ok(Verdict::allow());
    }

    match channel.kind {
        ChannelKind::Direct => {
            if !engine::can_send_direct(&cfg, &sender) {
                return Ok(Verdict::deny(REASON_SEND_DM));
            }

            let peer = resolve_peer(state, &channel, &sender).await?;
            if !engine::can_receive_direct(&cfg, &peer) {
                return Ok(Verdict::deny(REASON_RECEIVE_DM));
            }
        }
        ChannelKind::Group => {
            if !engine::can_send_group(&cfg, &sender) {
                return Ok(Verdict::deny(REASON_SEND_GM));
            }
        }
        // The policy only constrains direct and group channels.
        ChannelKind::Other => {}
    }

    Ok(Verdict::allow())
}

/// The other participant of a two-member direct channel. No default peer is
/// assumed: an unlistable membership or a membership with no other distinct
/// member is a lookup fault, never an allow or deny.
async fn resolve_peer(state: &AppState, channel: &Channel, sender: &User) -> Result<User> {
    let members = state
        .users()
        .users_in_channel(&channel.id, 0, 2)
        .await
        .map_err(|e| relabel("recipient", e))?;

    members
        .into_iter()
        .find(|u| u.id != sender.id)
        .ok_or_else(|| {
            GateError::lookup(
                "recipient",
                format!("no other member in direct channel {}", channel.id),
            )
        })
}

/// Re-attribute a directory fault to the lookup the hook was performing, so
/// the surfaced error names the failing step (channel vs sender vs recipient)
/// without nesting prefixes.
fn relabel(subject: &str, err: GateError) -> GateError {
    match err {
        GateError::Lookup { detail, .. } => GateError::Lookup {
            subject: subject.to_string(),
            detail,
        },
        other => GateError::lookup(subject, other),
    }
}
