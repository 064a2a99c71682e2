//! Top-level facade crate for chatGate.
//!
//! Re-exports core types and the gateway library so integrations can depend
//! on a single crate.

pub mod core {
    pub use chatgate_core::*;
}

pub mod gateway {
    pub use chatgate_gateway::*;
}
