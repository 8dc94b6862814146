//! devsim-tui - Terminal UI for the device simulator
//!
//! This crate draws a host application inside a simulated device frame
//! using ratatui. The host implements [`HostApp`] (or is a plain render
//! closure); [`DeviceSimulator`] owns the simulator state and wires the
//! toolbar, device frame and overlays around it; [`run`] drives the
//! terminal event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod simulator;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use event::TerminalEvent;
pub use runner::run;
pub use simulator::{DeviceSimulator, HostApp};
pub use widgets::screen::{safe_area_rect, unobscured_rect};
