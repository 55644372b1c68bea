//! Status types reported by the motion-control runtime.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The on/off state of a single coolant channel.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoolantState {
    #[default]
    Off,
    On,
}

impl CoolantState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for CoolantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "OFF"),
            Self::On => write!(f, "ON"),
        }
    }
}

/// The machine power/mode state of the runtime's task controller.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    #[default]
    Estop,
    EstopReset,
    Off,
    On,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Estop => "ESTOP",
            Self::EstopReset => "ESTOP_RESET",
            Self::Off => "OFF",
            Self::On => "ON",
        };
        f.write_str(name)
    }
}

/// A copy of the runtime's live status at one point in time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    pub task_state: TaskState,
    pub flood: CoolantState,
    pub mist: CoolantState,
}

impl StatusSnapshot {
    /// Lists the fields that differ from `previous`, in task, flood, mist order.
    pub fn changes_since(&self, previous: &StatusSnapshot) -> Vec<StatusChange> {
        let mut changes = Vec::new();
        if self.task_state != previous.task_state {
            changes.push(StatusChange::TaskState(self.task_state));
        }
        if self.flood != previous.flood {
            changes.push(StatusChange::Flood(self.flood));
        }
        if self.mist != previous.mist {
            changes.push(StatusChange::Mist(self.mist));
        }
        changes
    }
}

/// The key a status subscriber listens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusTopic {
    TaskState,
    Flood,
    Mist,
}

/// A single field change pushed to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusChange {
    TaskState(TaskState),
    Flood(CoolantState),
    Mist(CoolantState),
}

impl StatusChange {
    pub fn topic(&self) -> StatusTopic {
        match self {
            Self::TaskState(_) => StatusTopic::TaskState,
            Self::Flood(_) => StatusTopic::Flood,
            Self::Mist(_) => StatusTopic::Mist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_snapshot_has_no_changes() {
        let snapshot = StatusSnapshot::default();
        assert!(snapshot.changes_since(&snapshot).is_empty());
    }

    #[test]
    fn changes_are_listed_in_field_order() {
        let before = StatusSnapshot::default();
        let after = StatusSnapshot {
            task_state: TaskState::On,
            flood: CoolantState::Off,
            mist: CoolantState::On,
        };

        let changes = after.changes_since(&before);
        assert_eq!(
            changes,
            vec![
                StatusChange::TaskState(TaskState::On),
                StatusChange::Mist(CoolantState::On)
            ]
        );
        assert_eq!(changes[1].topic(), StatusTopic::Mist);
    }

    #[test]
    fn snapshot_serializes_with_snake_case_states() {
        let snapshot = StatusSnapshot {
            task_state: TaskState::EstopReset,
            flood: CoolantState::On,
            mist: CoolantState::Off,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"task_state":"estop_reset","flood":"on","mist":"off"}"#
        );
    }
}
