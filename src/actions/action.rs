//! The closed table of coolant actions and their `"channel.verb"` names.
use std::fmt;
use std::str::FromStr;

use super::ActionError;
use crate::runtime::StatusTopic;

/// A coolant delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Flood,
    Mist,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Flood, Channel::Mist];

    pub fn name(self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Mist => "mist",
        }
    }

    /// Capitalized name used in log lines.
    pub fn title(self) -> &'static str {
        match self {
            Self::Flood => "Flood",
            Self::Mist => "Mist",
        }
    }

    /// The status topic that reports this channel's state.
    pub fn status_topic(self) -> StatusTopic {
        match self {
            Self::Flood => StatusTopic::Flood,
            Self::Mist => StatusTopic::Mist,
        }
    }
}

impl FromStr for Channel {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flood" => Ok(Self::Flood),
            "mist" => Ok(Self::Mist),
            other => Err(ActionError::UnknownChannel(other.to_string())),
        }
    }
}

/// An operation on a coolant channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    On,
    Off,
    Toggle,
}

impl Verb {
    pub const ALL: [Verb; 3] = [Verb::On, Verb::Off, Verb::Toggle];

    pub fn name(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Toggle => "toggle",
        }
    }
}

impl FromStr for Verb {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "toggle" => Ok(Self::Toggle),
            other => Err(ActionError::UnknownVerb(other.to_string())),
        }
    }
}

/// A (channel, verb) pair such as `flood.toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoolantAction {
    pub channel: Channel,
    pub verb: Verb,
}

impl CoolantAction {
    pub const ALL: [CoolantAction; 6] = [
        CoolantAction::new(Channel::Flood, Verb::On),
        CoolantAction::new(Channel::Flood, Verb::Off),
        CoolantAction::new(Channel::Flood, Verb::Toggle),
        CoolantAction::new(Channel::Mist, Verb::On),
        CoolantAction::new(Channel::Mist, Verb::Off),
        CoolantAction::new(Channel::Mist, Verb::Toggle),
    ];

    pub const fn new(channel: Channel, verb: Verb) -> Self {
        Self { channel, verb }
    }

    /// Parses an identifier of the form `"<channel>.<verb>"`.
    ///
    /// Exactly one `.` is accepted. Names are case-sensitive and are not
    /// trimmed.
    pub fn parse(action: &str) -> Result<Self, ActionError> {
        let mut parts = action.split('.');
        let (channel, verb) = match (parts.next(), parts.next(), parts.next()) {
            (Some(channel), Some(verb), None) => (channel, verb),
            _ => return Err(ActionError::Malformed(action.to_string())),
        };

        Ok(Self {
            channel: channel.parse()?,
            verb: verb.parse()?,
        })
    }

    /// Whether the action mirrors channel state in a checkable widget.
    pub fn is_toggle(&self) -> bool {
        self.verb == Verb::Toggle
    }
}

impl FromStr for CoolantAction {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CoolantAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.channel.name(), self.verb.name())
    }
}
