//! The permission check for coolant commands.
use crate::panel::Widget;
use crate::runtime::{MotionRuntime, TaskState};

/// Shown when coolant commands are refused because the machine is not ON.
pub const COOLANT_BLOCKED_MESSAGE: &str = "Can't turn on coolant when machine is not ON";

/// Whether coolant commands are allowed, and why not if they aren't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardVerdict {
    pub ok: bool,
    /// Empty when `ok` is true.
    pub message: String,
}

impl GuardVerdict {
    pub fn allowed() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }

    pub fn denied<S: Into<String>>(message: S) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Enables or disables `widget` and sets its hints to the message.
    pub fn apply_to(&self, widget: &dyn Widget) {
        widget.set_enabled(self.ok);
        widget.set_status_tip(&self.message);
        widget.set_tooltip(&self.message);
    }
}

/// Checks whether it is OK to send coolant commands.
///
/// Coolant is allowed only while the machine is ON. When `widget` is given
/// it is updated to reflect the verdict.
pub fn coolant_ok(runtime: &dyn MotionRuntime, widget: Option<&dyn Widget>) -> GuardVerdict {
    let verdict = if runtime.status().task_state == TaskState::On {
        GuardVerdict::allowed()
    } else {
        GuardVerdict::denied(COOLANT_BLOCKED_MESSAGE)
    };

    if let Some(widget) = widget {
        verdict.apply_to(widget);
    }
    verdict
}
