//! This module handles the initial setup of the application.
use super::args::AppArgs;
use super::layout::PanelLayout;
use crate::logging;
use anyhow::Result;
use std::rc::Rc;
use tracing::{info, warn};
use vcp_coolant::actions::{Binding, Coolant};
use vcp_coolant::panel::PanelWidget;
use vcp_coolant::runtime::{MotionRuntime, SimulatedMachine, StatusHub, StatusMonitor, TaskState};

/// A widget on the panel and its binding, if the action name resolved.
pub struct BoundWidget {
    pub widget: Rc<PanelWidget>,
    pub action: String,
    pub binding: Option<Binding>,
}

/// Contains all the necessary components for the panel to run.
pub struct PreparedApp {
    /// The command-line arguments.
    pub args: AppArgs,
    /// The simulated runtime standing in for the machine.
    pub machine: Rc<SimulatedMachine>,
    /// Publishes runtime status changes to bound widgets.
    pub monitor: StatusMonitor,
    /// The coolant actions the widgets are bound to.
    pub coolant: Coolant,
    /// The panel widgets, in layout order.
    pub widgets: Vec<BoundWidget>,
}

/// Prepares the panel for running.
///
/// This function performs the following steps:
/// 1. Configures logging.
/// 2. Loads the panel layout.
/// 3. Starts the simulated runtime and its status monitor.
/// 4. Creates the widgets and binds them to their coolant actions.
///
/// # Errors
///
/// This function will return an error if the layout file cannot be loaded.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    logging::init(&args.log_level);

    let layout = match &args.config {
        Some(path) => PanelLayout::load(path)?,
        None => PanelLayout::default(),
    };

    let machine = Rc::new(SimulatedMachine::new());
    if args.machine_on {
        machine.set_task_state(TaskState::On);
    }

    let hub = StatusHub::new();
    let monitor = StatusMonitor::new(machine.clone(), hub.clone());
    let coolant = Coolant::new(machine.clone(), hub);

    let widgets = layout
        .widgets
        .into_iter()
        .map(|spec| {
            let widget = Rc::new(PanelWidget::new(spec.label, spec.kind));
            let binding = coolant.bind_widget(widget.clone(), &spec.action);
            if binding.is_none() {
                warn!(
                    "Widget '{}' left unbound: unknown action '{}'",
                    widget.label(),
                    spec.action
                );
            }
            BoundWidget {
                widget,
                action: spec.action,
                binding,
            }
        })
        .collect::<Vec<_>>();

    info!(
        "Panel ready: {} widget(s), machine {}",
        widgets.len(),
        machine.status().task_state
    );

    Ok(PreparedApp {
        args,
        machine,
        monitor,
        coolant,
        widgets,
    })
}
