//! Device Simulator - preview terminal UIs inside simulated device frames
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use device_simulator::{device_listing, run_with_project, simulator_options, LaunchOptions};
use devsim_app::config::init_config_dir;
use devsim_core::prelude::*;

/// Device Simulator - preview terminal UIs inside simulated device frames
#[derive(Parser, Debug)]
#[command(name = "devsim")]
#[command(
    about = "Preview terminal UIs inside simulated phone and tablet frames",
    long_about = None
)]
struct Args {
    /// Project directory holding .devsim/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Device to start on (case-insensitive name)
    #[arg(long, value_name = "NAME")]
    device: Option<String>,

    /// Force the simulator on, even in release builds
    #[arg(long, conflicts_with = "disable")]
    enable: bool,

    /// Force the simulator off
    #[arg(long)]
    disable: bool,

    /// Print the configured devices and exit
    #[arg(long)]
    list_devices: bool,

    /// Print the device list as JSON
    #[arg(long, requires = "list_devices")]
    json: bool,

    /// Write a default .devsim/config.toml and exit
    #[arg(long)]
    init: bool,
}

impl Args {
    fn enabled(&self) -> Option<bool> {
        match (self.enable, self.disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Get base path from args or use current directory
    let project_path = args
        .path
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        let path = init_config_dir(&project_path)?;
        eprintln!("Config: {}", path.display());
        return Ok(());
    }

    let launch = LaunchOptions {
        device: args.device.clone(),
        enabled: args.enabled(),
    };

    if args.list_devices {
        let options = simulator_options(&project_path, &launch);
        print!("{}", device_listing(&options.devices, args.json)?);
        return Ok(());
    }

    run_with_project(&project_path, &launch)
}
