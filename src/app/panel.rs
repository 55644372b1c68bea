//! The interactive operator panel loop.
//!
//! Operator input is read on a separate thread and forwarded over a channel;
//! the panel thread owns every widget and polls the runtime on a timer, so
//! all widget updates happen in one place.
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error};
use vcp_coolant::runtime::{CoolantState, MotionRuntime, TaskState};

use super::setup::{BoundWidget, PreparedApp};

const MIN_POLL_MS: u64 = 10;

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub async fn run(app: PreparedApp) -> Result<()> {
    let (line_sender, mut lines) = mpsc::unbounded_channel();
    spawn_line_reader(line_sender);

    let mut ticker = interval(Duration::from_millis(app.args.poll_ms.max(MIN_POLL_MS)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    print_widgets(&app.widgets);
    println!("Type 'help' for available commands.");

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else { break };
                match execute(&app, &line) {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => println!("{} {}", "❌".red(), e),
                }
            }
            _ = ticker.tick() => {
                if app.monitor.poll() > 0 {
                    print_widgets(&app.widgets);
                }
            }
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

/// Reads operator input lines until EOF or Ctrl-C.
fn spawn_line_reader(sender: mpsc::UnboundedSender<String>) {
    thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                error!("Cannot open line editor: {}", e);
                return;
            }
        };

        loop {
            match editor.readline("coolant> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    error!("Input error: {}", e);
                    break;
                }
            }
        }
    });
}

/// Executes one operator command against the panel.
pub fn execute(app: &PreparedApp, line: &str) -> Result<Flow> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(Flow::Continue);
    }

    debug!("Panel command: '{}'", line.trim());
    match parts[0] {
        "list" => print_widgets(&app.widgets),
        "press" => press(app, &parts)?,
        "machine" => set_machine(app, &parts)?,
        "external" => external_change(app, &parts)?,
        "status" => {
            let snapshot = app.machine.status();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        "guard" => {
            let verdict = app.coolant.coolant_ok(None);
            if verdict.ok {
                println!("{}", "Coolant commands allowed".green());
            } else {
                println!("{}", verdict.message.yellow());
            }
        }
        "help" => print_help(),
        "exit" | "quit" => return Ok(Flow::Exit),
        other => println!("Unknown command: {}. Type 'help' for available commands.", other),
    }
    Ok(Flow::Continue)
}

fn press(app: &PreparedApp, parts: &[&str]) -> Result<()> {
    let index = parts
        .get(1)
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or_else(|| anyhow!("Usage: press <widget number>"))?;
    let entry = index
        .checked_sub(1)
        .and_then(|i| app.widgets.get(i))
        .ok_or_else(|| anyhow!("No widget number {}", index))?;

    if !entry.widget.is_enabled() {
        println!(
            "{} is disabled: {}",
            entry.widget.label(),
            entry.widget.tooltip().yellow()
        );
        return Ok(());
    }

    // Runtime failures surface here, like an unhandled error in a slot.
    let outcome = entry.widget.activate();
    app.monitor.poll();
    print_widgets(&app.widgets);
    outcome.map_err(|e| anyhow!("{} failed: {}", entry.widget.label(), e))
}

fn set_machine(app: &PreparedApp, parts: &[&str]) -> Result<()> {
    let state = match parts.get(1).copied() {
        Some("on") => TaskState::On,
        Some("off") => TaskState::Off,
        Some("estop") => TaskState::Estop,
        Some("reset") => TaskState::EstopReset,
        _ => return Err(anyhow!("Usage: machine <on|off|estop|reset>")),
    };
    app.machine.set_task_state(state);
    app.monitor.poll();
    print_widgets(&app.widgets);
    Ok(())
}

fn external_change(app: &PreparedApp, parts: &[&str]) -> Result<()> {
    let state = match parts.get(2).copied() {
        Some("on") => CoolantState::On,
        Some("off") => CoolantState::Off,
        _ => return Err(anyhow!("Usage: external <flood|mist> <on|off>")),
    };
    match parts.get(1).copied() {
        Some("flood") => app.machine.set_flood(state),
        Some("mist") => app.machine.set_mist(state),
        _ => return Err(anyhow!("Usage: external <flood|mist> <on|off>")),
    }
    app.monitor.poll();
    print_widgets(&app.widgets);
    Ok(())
}

fn print_widgets(widgets: &[BoundWidget]) {
    for (n, entry) in widgets.iter().enumerate() {
        println!("{}", describe_widget(n + 1, entry));
    }
}

fn describe_widget(number: usize, entry: &BoundWidget) -> String {
    let widget = &entry.widget;
    let check = if !widget.is_checkable() {
        "   ".normal()
    } else if widget.is_checked() {
        "[x]".green().bold()
    } else {
        "[ ]".red()
    };

    let label = if entry.binding.is_none() {
        format!("{} (unbound: {})", widget.label(), entry.action)
            .dimmed()
            .to_string()
    } else if widget.is_enabled() {
        widget.label().bold().to_string()
    } else {
        format!("{} - {}", widget.label(), widget.tooltip())
            .dimmed()
            .to_string()
    };

    format!("[{}] {} {}", number, check, label)
}

fn print_help() {
    println!("Commands:");
    println!("  list                          show the panel widgets");
    println!("  press <n>                     click or trigger widget <n>");
    println!("  machine <on|off|estop|reset>  change machine state");
    println!("  external <flood|mist> <on|off> change coolant from outside the panel");
    println!("  status                        print the runtime status snapshot");
    println!("  guard                         check whether coolant is allowed");
    println!("  exit                          quit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{setup, AppArgs};

    fn prepared(machine_on: bool) -> PreparedApp {
        setup::prepare(AppArgs {
            config: None,
            machine_on,
            log_level: "warn".into(),
            poll_ms: 100,
        })
        .unwrap()
    }

    fn widget_index(app: &PreparedApp, action: &str) -> usize {
        app.widgets.iter().position(|w| w.action == action).unwrap() + 1
    }

    #[test]
    fn pressing_flood_toggle_turns_flood_on_and_checks_the_box() {
        let app = prepared(true);
        let n = widget_index(&app, "flood.toggle");

        execute(&app, &format!("press {}", n)).unwrap();

        assert_eq!(app.machine.status().flood, CoolantState::On);
        assert!(app.widgets[n - 1].widget.is_checked());
    }

    #[test]
    fn widgets_are_disabled_until_machine_is_on() {
        let app = prepared(false);
        assert!(app.widgets.iter().all(|w| !w.widget.is_enabled()));

        execute(&app, "machine on").unwrap();
        assert!(app.widgets.iter().all(|w| w.widget.is_enabled()));

        let n = widget_index(&app, "mist.on");
        execute(&app, "machine estop").unwrap();
        execute(&app, &format!("press {}", n)).unwrap();
        assert_eq!(app.machine.status().mist, CoolantState::Off);
    }

    #[test]
    fn external_change_updates_the_check_box() {
        let app = prepared(true);
        let n = widget_index(&app, "mist.toggle");

        execute(&app, "external mist on").unwrap();

        assert!(app.widgets[n - 1].widget.is_checked());
    }

    #[test]
    fn runtime_failure_is_reported_to_the_operator() {
        let app = prepared(true);
        app.machine.set_online(false);
        let n = widget_index(&app, "flood.on");

        assert!(execute(&app, &format!("press {}", n)).is_err());
    }

    #[test]
    fn bad_usage_is_an_error_and_exit_stops_the_loop() {
        let app = prepared(true);
        assert!(execute(&app, "press").is_err());
        assert!(execute(&app, "press 0").is_err());
        assert!(execute(&app, "machine sideways").is_err());
        assert_eq!(execute(&app, "   ").unwrap(), Flow::Continue);
        assert_eq!(execute(&app, "exit").unwrap(), Flow::Exit);
    }

    #[test]
    fn guard_and_status_commands_report_without_changing_state() {
        let app = prepared(false);

        assert_eq!(execute(&app, "guard").unwrap(), Flow::Continue);
        assert_eq!(execute(&app, "status").unwrap(), Flow::Continue);

        assert_eq!(app.machine.status().task_state, TaskState::Estop);
        assert!(app.machine.sent_commands().is_empty());
    }
}
