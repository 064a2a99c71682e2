//! Trigger points: message-post interception and member-join defaulting.
//!
//! Each hook reads one config snapshot up front and evaluates the pure
//! engine rules against it, so a concurrent replacement can never produce a
//! mixed decision.

pub mod join;
pub mod message;

pub use join::user_has_joined;
pub use message::{evaluate_message_post, message_will_be_posted, PostOutcome};
