//! Flood and mist command wrappers.
use std::rc::Rc;

use tracing::debug;

use super::action::{Channel, CoolantAction, Verb};
use crate::runtime::{CoolantState, MotionRuntime, RuntimeError};

/// The on/off/toggle operations for one coolant channel.
///
/// Runtime errors are returned to the caller untouched.
#[derive(Clone)]
pub struct ChannelControl {
    channel: Channel,
    runtime: Rc<dyn MotionRuntime>,
}

impl ChannelControl {
    pub fn new(channel: Channel, runtime: Rc<dyn MotionRuntime>) -> Self {
        Self { channel, runtime }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Turns the channel's coolant ON.
    pub fn on(&self) -> Result<(), RuntimeError> {
        debug!("Turning {} coolant ON", self.channel.title());
        self.send(CoolantState::On)
    }

    /// Turns the channel's coolant OFF.
    pub fn off(&self) -> Result<(), RuntimeError> {
        debug!("Turning {} coolant OFF", self.channel.title());
        self.send(CoolantState::Off)
    }

    /// Turns the coolant OFF if the runtime reports it ON, otherwise ON.
    ///
    /// The read and the command are not atomic; the runtime serializes
    /// commands, so a concurrent change only means the toggle acts on
    /// slightly stale state.
    pub fn toggle(&self) -> Result<(), RuntimeError> {
        if self.state().is_on() {
            self.off()
        } else {
            self.on()
        }
    }

    pub fn run(&self, verb: Verb) -> Result<(), RuntimeError> {
        match verb {
            Verb::On => self.on(),
            Verb::Off => self.off(),
            Verb::Toggle => self.toggle(),
        }
    }

    /// The channel state from the runtime's live snapshot.
    pub fn state(&self) -> CoolantState {
        let status = self.runtime.status();
        match self.channel {
            Channel::Flood => status.flood,
            Channel::Mist => status.mist,
        }
    }

    fn send(&self, state: CoolantState) -> Result<(), RuntimeError> {
        match self.channel {
            Channel::Flood => self.runtime.send_flood(state),
            Channel::Mist => self.runtime.send_mist(state),
        }
    }
}

/// A resolved action, ready to run.
#[derive(Clone)]
pub struct BoundCommand {
    action: CoolantAction,
    control: ChannelControl,
}

impl BoundCommand {
    pub(super) fn new(action: CoolantAction, control: ChannelControl) -> Self {
        Self { action, control }
    }

    pub fn action(&self) -> CoolantAction {
        self.action
    }

    pub fn invoke(&self) -> Result<(), RuntimeError> {
        self.control.run(self.action.verb)
    }
}
