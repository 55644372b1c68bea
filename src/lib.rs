//! Coolant actions for a machine-tool operator panel.
//!
//! Binds panel widgets to flood and mist coolant commands of a
//! motion-control runtime and keeps the widgets in step with machine status.
pub mod actions;
pub mod panel;
pub mod runtime;

pub use actions::{Coolant, CoolantAction, GuardVerdict};
