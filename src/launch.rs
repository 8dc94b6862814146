//! Application entry points - settings resolution and the TUI session

use std::path::Path;

use devsim_app::config::load_settings;
use devsim_app::SimulatorOptions;
use devsim_core::prelude::*;
use devsim_core::{logging, DeviceConfiguration};
use devsim_tui::DeviceSimulator;

use crate::demo::DemoApp;

/// Command-line overrides applied on top of `.devsim/config.toml`
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Device to start on
    pub device: Option<String>,
    /// Force the simulator on or off
    pub enabled: Option<bool>,
}

/// Resolve simulator options for a project: config file first, then CLI
pub fn simulator_options(project_path: &Path, launch: &LaunchOptions) -> SimulatorOptions {
    let settings = load_settings(project_path);
    let mut options = SimulatorOptions::from_settings(&settings);

    if let Some(device) = &launch.device {
        options = options.with_initial_device(device.clone());
    }
    if launch.enabled.is_some() {
        options = options.with_enabled(launch.enabled);
    }

    options
}

/// Main application entry point with a specific project path
pub fn run_with_project(project_path: &Path, launch: &LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init().context("Failed to initialize logging")?;

    info!("Project: {}", project_path.display());

    let options = simulator_options(project_path, launch);
    let simulator = DeviceSimulator::new(options, DemoApp::new())?;

    let result = devsim_tui::run(simulator);

    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Simulator could not run: {}", e);
        } else {
            error!("Application error: {:?}", e);
        }
    }

    info!("Device Simulator exiting");
    result
}

/// Render the device list for `--list-devices`
pub fn device_listing(devices: &[DeviceConfiguration], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(devices)?);
    }

    let name_width = devices
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for device in devices {
        out.push_str(&format!(
            "{:<name_width$}  {:<8} {:>5} x {:<5} {:>5.1}\"\n",
            device.name,
            device.platform.label(),
            device.screen.width,
            device.screen.height,
            device.diagonal_inches,
        ));
    }
    Ok(out)
}
