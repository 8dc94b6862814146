//! Settings parser for .devsim/config.toml

use std::path::{Path, PathBuf};

use devsim_core::prelude::*;
use devsim_core::{builtin_devices, DeviceConfiguration};

use super::types::{DeviceSettings, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const DEVSIM_DIR: &str = ".devsim";

const DEFAULT_CONFIG: &str = r##"# Device Simulator Configuration

[simulator]
# enabled = true          # Force on/off; unset = debug builds on desktop only
background = "#e0e0e0"    # Stage color behind the device frame
# initial_device = "Pixel 7"

[display]
pixels_per_inch = 96.0    # Density used for zoom normalization
cell_width_px = 8.0       # Logical width of one terminal cell
cell_height_px = 16.0     # Logical height of one terminal cell

[devices]
include_builtin = true

# [[devices.custom]]
# name = "Kiosk"
# platform = "android"
# screen = { width = 800.0, height = 1280.0 }
# diagonal_inches = 10.1
# frame = { bezel = 30.0, notch = "none", home_indicator = false }
# safe_areas = { portrait = { top = 24.0 }, landscape = { top = 24.0 } }
# keyboard_height = { portrait = 300.0, landscape = 240.0 }
"##;

/// Path of the settings file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(DEVSIM_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.devsim/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.devsim/config.toml` with commented defaults.
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let devsim_dir = project_path.join(DEVSIM_DIR);

    if !devsim_dir.exists() {
        std::fs::create_dir_all(&devsim_dir)
            .map_err(|e| Error::config(format!("Failed to create .devsim dir: {}", e)))?;
    }

    let config_path = devsim_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
    } else {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

/// Build the device list: built-ins (unless disabled) followed by valid
/// custom devices. Invalid custom devices are skipped with a warning.
pub fn resolve_devices(settings: &DeviceSettings) -> Vec<DeviceConfiguration> {
    let mut devices = if settings.include_builtin {
        builtin_devices()
    } else {
        Vec::new()
    };

    for device in &settings.custom {
        match device.validate() {
            Ok(()) => devices.push(device.clone()),
            Err(e) => warn!("Skipping custom device: {}", e),
        }
    }

    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsim_core::{Size, TargetPlatform};
    use tempfile::tempdir;

    fn kiosk() -> DeviceConfiguration {
        DeviceConfiguration {
            name: "Kiosk".into(),
            platform: TargetPlatform::Android,
            screen: Size::new(800.0, 1280.0),
            diagonal_inches: 10.1,
            frame: Default::default(),
            safe_areas: Default::default(),
            keyboard_height: Default::default(),
        }
    }

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_settings_malformed_file_uses_defaults() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(DEVSIM_DIR)).unwrap();
        std::fs::write(config_path(dir.path()), "[simulator\nenabled = ").unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_settings_reads_values() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(DEVSIM_DIR)).unwrap();
        std::fs::write(
            config_path(dir.path()),
            "[simulator]\nenabled = true\ninitial_device = \"Pixel 7\"\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.simulator.enabled, Some(true));
        assert_eq!(settings.simulator.initial_device.as_deref(), Some("Pixel 7"));
    }

    #[test]
    fn test_init_config_dir_writes_parseable_defaults() {
        let dir = tempdir().unwrap();
        let path = init_config_dir(dir.path()).unwrap();
        assert!(path.exists());

        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(DEVSIM_DIR)).unwrap();
        std::fs::write(config_path(dir.path()), "[simulator]\nenabled = false\n").unwrap();

        init_config_dir(dir.path()).unwrap();
        assert_eq!(load_settings(dir.path()).simulator.enabled, Some(false));
    }

    #[test]
    fn test_resolve_devices_appends_custom() {
        let settings = DeviceSettings {
            include_builtin: true,
            custom: vec![kiosk()],
        };
        let devices = resolve_devices(&settings);
        assert_eq!(devices.len(), builtin_devices().len() + 1);
        assert_eq!(devices.last().unwrap().name, "Kiosk");
    }

    #[test]
    fn test_resolve_devices_custom_only() {
        let settings = DeviceSettings {
            include_builtin: false,
            custom: vec![kiosk()],
        };
        let devices = resolve_devices(&settings);
        assert_eq!(devices.len(), 1);
    }

    #[test]
    fn test_resolve_devices_skips_invalid() {
        let mut broken = kiosk();
        broken.diagonal_inches = 0.0;
        let settings = DeviceSettings {
            include_builtin: false,
            custom: vec![broken],
        };
        assert!(resolve_devices(&settings).is_empty());
    }
}
