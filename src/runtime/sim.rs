//! An in-process stand-in for the motion-control runtime.
use std::cell::{Cell, RefCell};

use tracing::{debug, warn};

use super::status::{CoolantState, StatusSnapshot, TaskState};
use super::{MotionRuntime, RuntimeError};

/// A coolant command as received by the simulated runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentCommand {
    Flood(CoolantState),
    Mist(CoolantState),
}

/// A simulated machine that applies coolant commands immediately.
///
/// Like the real task controller, it refuses coolant commands unless the
/// machine is ON. Every accepted or rejected command is recorded.
#[derive(Debug)]
pub struct SimulatedMachine {
    status: Cell<StatusSnapshot>,
    online: Cell<bool>,
    sent: RefCell<Vec<SentCommand>>,
}

impl SimulatedMachine {
    pub fn new() -> Self {
        Self::with_status(StatusSnapshot::default())
    }

    pub fn with_status(status: StatusSnapshot) -> Self {
        Self {
            status: Cell::new(status),
            online: Cell::new(true),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn set_task_state(&self, task_state: TaskState) {
        let mut status = self.status.get();
        status.task_state = task_state;
        // Dropping out of ON shuts coolant off, as the task controller does.
        if task_state != TaskState::On {
            status.flood = CoolantState::Off;
            status.mist = CoolantState::Off;
        }
        self.status.set(status);
    }

    /// Changes flood state as if from outside the panel (e.g. a pendant).
    pub fn set_flood(&self, state: CoolantState) {
        let mut status = self.status.get();
        status.flood = state;
        self.status.set(status);
    }

    /// Changes mist state as if from outside the panel.
    pub fn set_mist(&self, state: CoolantState) {
        let mut status = self.status.get();
        status.mist = state;
        self.status.set(status);
    }

    pub fn set_online(&self, online: bool) {
        self.online.set(online);
    }

    /// Returns the commands received so far, oldest first.
    pub fn sent_commands(&self) -> Vec<SentCommand> {
        self.sent.borrow().clone()
    }

    fn accept(&self, command: SentCommand) -> Result<(), RuntimeError> {
        self.sent.borrow_mut().push(command);

        if !self.online.get() {
            warn!("Dropping {:?}: runtime offline", command);
            return Err(RuntimeError::Offline);
        }

        let status = self.status.get();
        if status.task_state != TaskState::On {
            return Err(RuntimeError::Rejected(format!(
                "can't do that ({:?}) in machine state {}",
                command, status.task_state
            )));
        }

        debug!("Applying {:?}", command);
        match command {
            SentCommand::Flood(state) => self.set_flood(state),
            SentCommand::Mist(state) => self.set_mist(state),
        }
        Ok(())
    }
}

impl Default for SimulatedMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionRuntime for SimulatedMachine {
    fn send_flood(&self, state: CoolantState) -> Result<(), RuntimeError> {
        self.accept(SentCommand::Flood(state))
    }

    fn send_mist(&self, state: CoolantState) -> Result<(), RuntimeError> {
        self.accept(SentCommand::Mist(state))
    }

    fn status(&self) -> StatusSnapshot {
        self.status.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_apply_when_machine_is_on() {
        let machine = SimulatedMachine::new();
        machine.set_task_state(TaskState::On);

        machine.send_mist(CoolantState::On).unwrap();

        assert_eq!(machine.status().mist, CoolantState::On);
        assert_eq!(machine.sent_commands(), vec![SentCommand::Mist(CoolantState::On)]);
    }

    #[test]
    fn commands_are_rejected_when_machine_is_off() {
        let machine = SimulatedMachine::new();
        machine.set_task_state(TaskState::Off);

        let err = machine.send_flood(CoolantState::On).unwrap_err();

        assert!(matches!(err, RuntimeError::Rejected(_)));
        assert_eq!(machine.status().flood, CoolantState::Off);
    }

    #[test]
    fn offline_runtime_reports_offline() {
        let machine = SimulatedMachine::new();
        machine.set_task_state(TaskState::On);
        machine.set_online(false);

        assert_eq!(machine.send_flood(CoolantState::On), Err(RuntimeError::Offline));
    }

    #[test]
    fn leaving_on_state_stops_coolant() {
        let machine = SimulatedMachine::new();
        machine.set_task_state(TaskState::On);
        machine.set_flood(CoolantState::On);

        machine.set_task_state(TaskState::Estop);

        assert_eq!(machine.status().flood, CoolantState::Off);
    }
}
