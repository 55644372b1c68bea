//! Coolant actions for the operator panel.
//!
//! This module maps `"channel.verb"` action names to flood/mist command
//! wrappers, gates them on machine power, and binds them to widgets so the
//! widgets follow live machine status.
mod action;
mod binding;
mod commands;
mod coolant;
mod guard;

pub use action::{Channel, CoolantAction, Verb};
pub use binding::Binding;
pub use commands::{BoundCommand, ChannelControl};
pub use coolant::Coolant;
pub use guard::{coolant_ok, GuardVerdict, COOLANT_BLOCKED_MESSAGE};

use thiserror::Error;

/// Errors raised while resolving or binding a coolant action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("malformed coolant action '{0}': expected '<channel>.<verb>'")]
    Malformed(String),

    #[error("unknown coolant channel '{0}' (expected flood or mist)")]
    UnknownChannel(String),

    #[error("unknown coolant verb '{0}' (expected on, off or toggle)")]
    UnknownVerb(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
