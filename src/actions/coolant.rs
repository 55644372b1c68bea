//! This module defines `Coolant`, the entry point for coolant actions.
use std::rc::Rc;

use tracing::error;

use super::action::{Channel, CoolantAction};
use super::commands::{BoundCommand, ChannelControl};
use super::guard::{coolant_ok, GuardVerdict};
use super::ActionError;
use crate::panel::Widget;
use crate::runtime::{MotionRuntime, StatusHub};

/// Gives UI code access to the coolant actions of one runtime.
///
/// Holds the runtime handle used for commands and status reads, and the
/// hub widgets subscribe to for status changes.
#[derive(Clone)]
pub struct Coolant {
    runtime: Rc<dyn MotionRuntime>,
    hub: StatusHub,
}

impl Coolant {
    /// Creates a new `Coolant`.
    ///
    /// # Arguments
    ///
    /// * `runtime` - The motion-control runtime commands are sent to.
    /// * `hub` - The hub that publishes the runtime's status changes.
    pub fn new(runtime: Rc<dyn MotionRuntime>, hub: StatusHub) -> Self {
        Self { runtime, hub }
    }

    pub fn runtime(&self) -> &Rc<dyn MotionRuntime> {
        &self.runtime
    }

    pub fn hub(&self) -> &StatusHub {
        &self.hub
    }

    pub fn flood(&self) -> ChannelControl {
        self.channel(Channel::Flood)
    }

    pub fn mist(&self) -> ChannelControl {
        self.channel(Channel::Mist)
    }

    pub fn channel(&self, channel: Channel) -> ChannelControl {
        ChannelControl::new(channel, self.runtime.clone())
    }

    /// Binds `action` to the command wrapper that carries it out.
    pub fn command(&self, action: CoolantAction) -> BoundCommand {
        BoundCommand::new(action, self.channel(action.channel))
    }

    /// Resolves an action name such as `"mist.toggle"`.
    ///
    /// Invalid names are logged and yield `None`; callers should treat
    /// `None` as "do nothing".
    pub fn method_from_string(&self, action: &str) -> Option<BoundCommand> {
        match CoolantAction::parse(action) {
            Ok(action) => Some(self.command(action)),
            Err(e) => {
                error!("Cannot resolve coolant action: {}", e);
                None
            }
        }
    }

    /// Checks whether coolant commands are currently allowed, updating
    /// `widget` to match when one is given.
    pub fn coolant_ok(&self, widget: Option<&dyn Widget>) -> GuardVerdict {
        coolant_ok(self.runtime.as_ref(), widget)
    }

    /// Binding coolant actions to key presses is not supported.
    pub fn bind_key(&self, _key: &str, _action: &str) -> Result<(), ActionError> {
        Err(ActionError::NotImplemented("binding coolant actions to keys"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{CoolantState, SimulatedMachine, TaskState};

    fn coolant_with(machine: &Rc<SimulatedMachine>) -> Coolant {
        Coolant::new(machine.clone(), StatusHub::new())
    }

    #[test]
    fn resolves_each_well_formed_name_to_its_action() {
        let machine = Rc::new(SimulatedMachine::new());
        let coolant = coolant_with(&machine);

        for action in CoolantAction::ALL {
            let command = coolant.method_from_string(&action.to_string()).unwrap();
            assert_eq!(command.action(), action);
        }
    }

    #[test]
    fn malformed_names_resolve_to_none() {
        let machine = Rc::new(SimulatedMachine::new());
        let coolant = coolant_with(&machine);

        for name in ["flood", "flood.on.off", "coolant.on", "mist.blast", "", "flood."] {
            assert!(coolant.method_from_string(name).is_none(), "{name:?}");
        }
    }

    #[test]
    fn resolved_command_reaches_the_runtime() {
        let machine = Rc::new(SimulatedMachine::new());
        machine.set_task_state(TaskState::On);
        let coolant = coolant_with(&machine);

        coolant.method_from_string("mist.toggle").unwrap().invoke().unwrap();

        assert_eq!(machine.status().mist, CoolantState::On);
    }

    #[test]
    fn bind_key_is_not_implemented() {
        let machine = Rc::new(SimulatedMachine::new());
        let coolant = coolant_with(&machine);

        assert!(matches!(
            coolant.bind_key("F8", "flood.toggle"),
            Err(ActionError::NotImplemented(_))
        ));
    }
}
