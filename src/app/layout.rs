//! This module defines the panel layout: which widgets exist and which
//! coolant action each one is bound to.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use vcp_coolant::panel::WidgetKind;

/// One widget on the panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetSpec {
    pub label: String,
    pub kind: WidgetKind,
    /// Action name such as `"flood.toggle"`.
    pub action: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub widgets: Vec<WidgetSpec>,
}

impl PanelLayout {
    /// Loads a layout from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read panel layout '{}'", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid panel layout '{}'", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(raw)?;
        if layout.widgets.is_empty() {
            anyhow::bail!("Panel layout has no widgets");
        }
        Ok(layout)
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        let widget = |label: &str, kind, action: &str| WidgetSpec {
            label: label.to_string(),
            kind,
            action: action.to_string(),
        };

        Self {
            widgets: vec![
                widget("Flood Coolant", WidgetKind::CheckBox, "flood.toggle"),
                widget("Mist Coolant", WidgetKind::CheckBox, "mist.toggle"),
                widget("Flood On", WidgetKind::PushButton, "flood.on"),
                widget("Flood Off", WidgetKind::PushButton, "flood.off"),
                widget("Mist On", WidgetKind::MenuAction, "mist.on"),
                widget("Mist Off", WidgetKind::MenuAction, "mist.off"),
            ],
        }
    }
}
