//! Turns periodic runtime snapshots into change notifications.
use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::hub::StatusHub;
use super::status::StatusSnapshot;
use super::MotionRuntime;

/// Polls a runtime and publishes one `StatusChange` per field that changed
/// since the previous poll.
pub struct StatusMonitor {
    runtime: Rc<dyn MotionRuntime>,
    hub: StatusHub,
    last: Cell<StatusSnapshot>,
}

impl StatusMonitor {
    /// Creates a monitor primed with the runtime's current snapshot, so the
    /// first `poll` only reports changes made after construction.
    pub fn new(runtime: Rc<dyn MotionRuntime>, hub: StatusHub) -> Self {
        let last = Cell::new(runtime.status());
        Self { runtime, hub, last }
    }

    pub fn hub(&self) -> &StatusHub {
        &self.hub
    }

    pub fn last_snapshot(&self) -> StatusSnapshot {
        self.last.get()
    }

    /// Reads the runtime status and publishes the differences.
    ///
    /// Returns the number of changes published.
    pub fn poll(&self) -> usize {
        let current = self.runtime.status();
        let changes = current.changes_since(&self.last.get());
        // Record before publishing so re-entrant polls see the new baseline.
        self.last.set(current);

        for change in &changes {
            debug!("Status changed: {:?}", change);
            self.hub.publish(*change);
        }
        changes.len()
    }
}
