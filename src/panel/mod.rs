//! This module defines the widget surface the coolant actions bind to.
//!
//! `Widget` is the part of a UI toolkit's widget API the bindings need:
//! one activation signal, plus enabled, checked and hint mutators. All
//! mutators take `&self` because toolkit widgets are shared handles.
pub mod widget;

pub use widget::PanelWidget;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::runtime::RuntimeError;

/// A callback connected to a widget signal.
pub type Slot = Rc<dyn Fn() -> Result<(), RuntimeError>>;

/// The signals a widget can emit when the operator activates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Emitted by buttons and check boxes.
    Clicked,
    /// Emitted by menu and toolbar actions.
    Triggered,
}

/// The widget variants a coolant action can be bound to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    PushButton,
    CheckBox,
    MenuAction,
}

impl WidgetKind {
    /// The signal that represents "the operator used this widget".
    pub fn activation_signal(self) -> Signal {
        match self {
            Self::MenuAction => Signal::Triggered,
            Self::PushButton | Self::CheckBox => Signal::Clicked,
        }
    }
}

/// A UI widget that can be bound to a coolant action.
pub trait Widget {
    fn kind(&self) -> WidgetKind;

    fn activation_signal(&self) -> Signal {
        self.kind().activation_signal()
    }

    /// Connects `slot` so it runs every time `signal` is emitted.
    fn connect(&self, signal: Signal, slot: Slot);

    fn set_enabled(&self, enabled: bool);

    fn set_tooltip(&self, text: &str);

    fn set_status_tip(&self, text: &str);

    fn set_checkable(&self, checkable: bool);

    fn set_checked(&self, checked: bool);
}
