//! Configuration types for the device simulator
//!
//! Defines:
//! - `Settings` - Contents of `.devsim/config.toml`
//! - Related sub-sections

use devsim_core::{DeviceConfiguration, Rgb, DEFAULT_PIXELS_PER_INCH};
use serde::{Deserialize, Serialize};

/// Simulator settings (.devsim/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub simulator: SimulatorSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub devices: DeviceSettings,
}

/// Construction-time simulator options
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SimulatorSettings {
    /// Force the simulator on or off; `None` defers to the enable policy
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Stage background behind the device frame
    #[serde(default)]
    pub background: Rgb,

    /// Device selected at startup (by name); first device when unset
    #[serde(default)]
    pub initial_device: Option<String>,
}

/// How terminal cells map to logical units
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DisplaySettings {
    /// Density used to convert rendered logical units to inches
    #[serde(default = "default_pixels_per_inch")]
    pub pixels_per_inch: f64,

    /// Width of one terminal cell in logical units
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f64,

    /// Height of one terminal cell in logical units
    #[serde(default = "default_cell_height")]
    pub cell_height_px: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            pixels_per_inch: default_pixels_per_inch(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
        }
    }
}

fn default_pixels_per_inch() -> f64 {
    DEFAULT_PIXELS_PER_INCH
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_cell_height() -> f64 {
    16.0
}

/// Device list sources
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeviceSettings {
    /// Start the list with the built-in presets
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Extra devices appended after the built-ins
    #[serde(default)]
    pub custom: Vec<DeviceConfiguration>,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            include_builtin: true,
            custom: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
