//! This module defines the boundary to the motion-control runtime.
//!
//! The runtime owns machine and coolant state. The panel only reads its
//! status snapshot and sends fire-and-forget coolant commands through the
//! `MotionRuntime` trait.
pub mod hub;
pub mod monitor;
pub mod sim;
pub mod status;

pub use hub::{StatusHandler, StatusHub, SubscriptionId};
pub use monitor::StatusMonitor;
pub use sim::SimulatedMachine;
pub use status::{CoolantState, StatusChange, StatusSnapshot, StatusTopic, TaskState};

use thiserror::Error;

/// Errors reported by the runtime when a command cannot be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("motion-control runtime is offline")]
    Offline,

    #[error("command rejected by runtime: {0}")]
    Rejected(String),
}

/// A handle to the external motion-control runtime.
///
/// Commands are queued by the runtime and return without waiting for
/// completion. `status` returns the latest snapshot the runtime has
/// published.
pub trait MotionRuntime {
    /// Requests a new flood coolant state.
    fn send_flood(&self, state: CoolantState) -> Result<(), RuntimeError>;

    /// Requests a new mist coolant state.
    fn send_mist(&self, state: CoolantState) -> Result<(), RuntimeError>;

    /// Returns the current status snapshot.
    fn status(&self) -> StatusSnapshot;
}
