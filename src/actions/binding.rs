//! Binds widgets to coolant actions and keeps them in sync with status.
use std::rc::Rc;

use tracing::debug;

use super::action::CoolantAction;
use super::coolant::Coolant;
use super::guard::coolant_ok;
use crate::panel::{Slot, Widget};
use crate::runtime::{StatusChange, StatusHub, StatusTopic, SubscriptionId};

/// The status subscriptions created for one bound widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    action: CoolantAction,
    subscriptions: Vec<SubscriptionId>,
}

impl Binding {
    pub fn action(&self) -> CoolantAction {
        self.action
    }

    pub fn subscriptions(&self) -> &[SubscriptionId] {
        &self.subscriptions
    }

    /// Stops the widget from following status changes.
    ///
    /// The widget's activation connection is left in place; it lives as
    /// long as the widget does. Returns the number of subscriptions removed.
    pub fn release(self, hub: &StatusHub) -> usize {
        self.subscriptions
            .into_iter()
            .filter(|id| hub.unsubscribe(*id))
            .count()
    }
}

impl Coolant {
    /// Binds `widget` to the coolant action named by `action`.
    ///
    /// Activating the widget runs the action. The widget is enabled only
    /// while the machine is ON, re-checked on every task state change.
    /// Toggle actions also make the widget checkable and keep its checked
    /// state equal to the channel state.
    ///
    /// An invalid action name is logged and leaves the widget untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use std::rc::Rc;
    /// use vcp_coolant::actions::Coolant;
    /// use vcp_coolant::panel::{PanelWidget, WidgetKind};
    /// use vcp_coolant::runtime::{SimulatedMachine, StatusHub};
    ///
    /// let coolant = Coolant::new(Rc::new(SimulatedMachine::new()), StatusHub::new());
    /// let check = Rc::new(PanelWidget::new("Flood Coolant", WidgetKind::CheckBox));
    /// assert!(coolant.bind_widget(check.clone(), "flood.toggle").is_some());
    /// assert!(check.is_checkable());
    /// ```
    pub fn bind_widget(&self, widget: Rc<dyn Widget>, action: &str) -> Option<Binding> {
        let command = self.method_from_string(action)?;
        Some(self.bind_widget_action(widget, command.action()))
    }

    /// Binds `widget` to an already-resolved action.
    pub fn bind_widget_action(&self, widget: Rc<dyn Widget>, action: CoolantAction) -> Binding {
        let command = self.command(action);
        let slot: Slot = Rc::new(move || command.invoke());
        widget.connect(widget.activation_signal(), slot);

        let mut subscriptions = Vec::new();

        self.coolant_ok(Some(widget.as_ref()));
        {
            let runtime = self.runtime().clone();
            let widget = widget.clone();
            subscriptions.push(self.hub().subscribe(StatusTopic::TaskState, move |_| {
                coolant_ok(runtime.as_ref(), Some(widget.as_ref()));
            }));
        }

        if action.is_toggle() {
            let channel = self.channel(action.channel);
            widget.set_checkable(true);
            widget.set_checked(channel.state().is_on());

            let widget = widget.clone();
            subscriptions.push(self.hub().subscribe(
                action.channel.status_topic(),
                move |change| {
                    if let StatusChange::Flood(state) | StatusChange::Mist(state) = change {
                        widget.set_checked(state.is_on());
                    }
                },
            ));
        }

        debug!("Bound widget to {}", action);
        Binding {
            action,
            subscriptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{PanelWidget, WidgetKind};
    use crate::runtime::{
        CoolantState, MotionRuntime, RuntimeError, SimulatedMachine, StatusMonitor, TaskState,
    };

    struct Fixture {
        machine: Rc<SimulatedMachine>,
        monitor: StatusMonitor,
        coolant: Coolant,
    }

    fn fixture(task_state: TaskState) -> Fixture {
        let machine = Rc::new(SimulatedMachine::new());
        machine.set_task_state(task_state);
        let hub = StatusHub::new();
        let monitor = StatusMonitor::new(machine.clone(), hub.clone());
        let coolant = Coolant::new(machine.clone(), hub);
        Fixture {
            machine,
            monitor,
            coolant,
        }
    }

    #[test]
    fn invalid_action_makes_no_connection() {
        let f = fixture(TaskState::On);
        let button = Rc::new(PanelWidget::new("Flood", WidgetKind::PushButton));

        for name in ["flood", "flood.on.off", "water.on", "flood.spray"] {
            assert!(f.coolant.bind_widget(button.clone(), name).is_none());
        }

        assert_eq!(button.connection_count(), 0);
        button.activate().unwrap();
        assert!(f.machine.sent_commands().is_empty());
    }

    #[test]
    fn activation_runs_the_bound_action() {
        let f = fixture(TaskState::On);
        let menu = Rc::new(PanelWidget::new("Mist On", WidgetKind::MenuAction));

        f.coolant.bind_widget(menu.clone(), "mist.on").unwrap();
        menu.activate().unwrap();

        assert_eq!(f.machine.status().mist, CoolantState::On);
    }

    #[test]
    fn guard_is_applied_at_bind_time_and_on_task_changes() {
        let f = fixture(TaskState::Off);
        let button = Rc::new(PanelWidget::new("Flood On", WidgetKind::PushButton));

        f.coolant.bind_widget(button.clone(), "flood.on").unwrap();
        assert!(!button.is_enabled());

        f.machine.set_task_state(TaskState::On);
        f.monitor.poll();
        assert!(button.is_enabled());
        assert!(button.tooltip().is_empty());

        f.machine.set_task_state(TaskState::Estop);
        f.monitor.poll();
        assert!(!button.is_enabled());
    }

    #[test]
    fn toggle_binding_tracks_channel_state() {
        let f = fixture(TaskState::On);
        f.machine.set_flood(CoolantState::On);
        f.monitor.poll();

        let check = Rc::new(PanelWidget::new("Flood", WidgetKind::CheckBox));
        let binding = f.coolant.bind_widget(check.clone(), "flood.toggle").unwrap();
        assert!(check.is_checkable());
        assert!(check.is_checked());
        assert_eq!(binding.subscriptions().len(), 2);

        f.machine.set_flood(CoolantState::Off);
        f.monitor.poll();
        assert!(!check.is_checked());

        // Mist changes leave the flood check box alone.
        f.machine.set_mist(CoolantState::On);
        f.monitor.poll();
        assert!(!check.is_checked());
    }

    #[test]
    fn non_toggle_binding_is_not_checkable() {
        let f = fixture(TaskState::On);
        let button = Rc::new(PanelWidget::new("Mist Off", WidgetKind::PushButton));

        let binding = f.coolant.bind_widget(button.clone(), "mist.off").unwrap();

        assert!(!button.is_checkable());
        assert_eq!(binding.subscriptions().len(), 1);
    }

    #[test]
    fn released_binding_stops_following_status() {
        let f = fixture(TaskState::On);
        let check = Rc::new(PanelWidget::new("Mist", WidgetKind::CheckBox));
        let binding = f.coolant.bind_widget(check.clone(), "mist.toggle").unwrap();

        assert_eq!(binding.release(f.coolant.hub()), 2);

        f.machine.set_task_state(TaskState::Off);
        f.machine.set_mist(CoolantState::On);
        assert_eq!(f.monitor.poll(), 2);
        assert!(!check.is_checked());
        assert!(check.is_enabled());
    }

    #[test]
    fn failed_toggle_leaves_check_box_matching_channel() {
        let f = fixture(TaskState::On);
        let check = Rc::new(PanelWidget::new("Flood", WidgetKind::CheckBox));
        f.coolant.bind_widget(check.clone(), "flood.toggle").unwrap();

        f.machine.set_online(false);
        assert_eq!(check.activate(), Err(RuntimeError::Offline));
        f.monitor.poll();

        assert_eq!(f.machine.status().flood, CoolantState::Off);
        assert!(!check.is_checked());
    }
}
