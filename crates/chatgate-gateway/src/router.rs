//! Axum router wiring for the restrictions query endpoint.
//!
//! `GET /restrictions` answers "what can the requesting user do right now";
//! every other path falls through to axum's 404.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use chatgate_core::policy::engine;

use crate::app_state::AppState;

/// Header carrying the authenticated requester's user id, stamped by the
/// host platform in front of this endpoint.
pub const USER_ID_HEADER: &str = "x-chatgate-user-id";

#[derive(Debug, Serialize)]
struct Restrictions {
    #[serde(rename = "canSendDMs")]
    can_send_dms: bool,
    #[serde(rename = "canReceiveDMs")]
    can_receive_dms: bool,
    #[serde(rename = "canParticipateInGroupChats")]
    can_participate_in_group_chats: bool,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/restrictions", get(get_restrictions))
        .with_state(state)
}

async fn get_restrictions(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let user_id = match headers.get(USER_ID_HEADER).and_then(|v| v.to_str().ok()) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "failed to get user\n").into_response();
        }
    };

    let user = match state.users().get_user(&user_id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(%user_id, error = %e, "restrictions query for unresolvable user");
            return (StatusCode::INTERNAL_SERVER_ERROR, "failed to get user\n").into_response();
        }
    };

    // The requester stands as both sender and recipient.
    let cfg = state.config().read();
    Json(Restrictions {
        can_send_dms: engine::can_send_direct(&cfg, &user),
        can_receive_dms: engine::can_receive_direct(&cfg, &user),
        can_participate_in_group_chats: engine::can_send_group(&cfg, &user),
    })
    .into_response()
}
