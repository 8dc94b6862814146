//! Configuration file parsing for the device simulator
//!
//! Supports:
//! - `.devsim/config.toml` - Simulator, display and device settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, resolve_devices};
pub use types::*;
