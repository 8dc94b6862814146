//! Device Simulator Library
//!
//! Previews a terminal UI inside simulated phone and tablet frames.

// Module declarations
pub mod demo;
pub mod launch;

// Re-export main entry points
pub use launch::{device_listing, run_with_project, simulator_options, LaunchOptions};
