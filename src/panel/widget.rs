//! A headless widget model used by the operator panel and in tests.
use std::cell::{Cell, RefCell};

use super::{Signal, Slot, Widget, WidgetKind};
use crate::runtime::RuntimeError;

/// A toolkit-independent widget that records its state and connected slots.
///
/// Activation follows toolkit conventions: a disabled widget emits nothing,
/// and a checkable widget flips its checked state before emitting, flipping
/// it back if a slot fails.
pub struct PanelWidget {
    label: String,
    kind: WidgetKind,
    enabled: Cell<bool>,
    checkable: Cell<bool>,
    checked: Cell<bool>,
    tooltip: RefCell<String>,
    status_tip: RefCell<String>,
    slots: RefCell<Vec<(Signal, Slot)>>,
}

impl PanelWidget {
    pub fn new<S: Into<String>>(label: S, kind: WidgetKind) -> Self {
        Self {
            label: label.into(),
            kind,
            enabled: Cell::new(true),
            checkable: Cell::new(false),
            checked: Cell::new(false),
            tooltip: RefCell::new(String::new()),
            status_tip: RefCell::new(String::new()),
            slots: RefCell::new(Vec::new()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable.get()
    }

    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    pub fn tooltip(&self) -> String {
        self.tooltip.borrow().clone()
    }

    pub fn status_tip(&self) -> String {
        self.status_tip.borrow().clone()
    }

    /// Number of slots connected to any signal.
    pub fn connection_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Simulates the operator clicking or triggering the widget.
    ///
    /// Returns the first error raised by a connected slot; later slots
    /// still run. A failed activation restores the checked state.
    pub fn activate(&self) -> Result<(), RuntimeError> {
        if !self.enabled.get() {
            return Ok(());
        }
        let was_checked = self.checked.get();
        if self.checkable.get() {
            self.checked.set(!was_checked);
        }
        let outcome = self.emit(self.kind.activation_signal());
        if outcome.is_err() {
            // No status change will follow a failed command.
            self.checked.set(was_checked);
        }
        outcome
    }

    /// Emits `signal`, running every slot connected to it.
    pub fn emit(&self, signal: Signal) -> Result<(), RuntimeError> {
        let slots: Vec<Slot> = self
            .slots
            .borrow()
            .iter()
            .filter(|(s, _)| *s == signal)
            .map(|(_, slot)| slot.clone())
            .collect();

        let mut first_error = None;
        for slot in slots {
            if let Err(e) = slot() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Widget for PanelWidget {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn connect(&self, signal: Signal, slot: Slot) {
        self.slots.borrow_mut().push((signal, slot));
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    fn set_tooltip(&self, text: &str) {
        *self.tooltip.borrow_mut() = text.to_string();
    }

    fn set_status_tip(&self, text: &str) {
        *self.status_tip.borrow_mut() = text.to_string();
    }

    fn set_checkable(&self, checkable: bool) {
        self.checkable.set(checkable);
        if !checkable {
            self.checked.set(false);
        }
    }

    fn set_checked(&self, checked: bool) {
        if self.checkable.get() {
            self.checked.set(checked);
        }
    }
}
