//! Device descriptions
//!
//! A [`DeviceConfiguration`] is plain immutable data: built once when the
//! catalog is defined (or parsed from configuration) and shared read-only by
//! everything that renders it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Size;

/// Screen orientation of the simulated device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

/// Platform whose UI conventions a device implies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    Android,
    Ios,
    Fuchsia,
    Linux,
    MacOs,
    Windows,
}

impl TargetPlatform {
    /// Platform of the running binary.
    pub fn host() -> Self {
        if cfg!(target_os = "android") {
            TargetPlatform::Android
        } else if cfg!(target_os = "ios") {
            TargetPlatform::Ios
        } else if cfg!(target_os = "fuchsia") {
            TargetPlatform::Fuchsia
        } else if cfg!(target_os = "macos") {
            TargetPlatform::MacOs
        } else if cfg!(target_os = "windows") {
            TargetPlatform::Windows
        } else {
            TargetPlatform::Linux
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TargetPlatform::Android => "Android",
            TargetPlatform::Ios => "iOS",
            TargetPlatform::Fuchsia => "Fuchsia",
            TargetPlatform::Linux => "Linux",
            TargetPlatform::MacOs => "macOS",
            TargetPlatform::Windows => "Windows",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, TargetPlatform::Android | TargetPlatform::Ios)
    }

    pub fn is_apple(&self) -> bool {
        matches!(self, TargetPlatform::Ios | TargetPlatform::MacOs)
    }
}

impl std::fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Insets from each edge, in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn only_bottom(bottom: f64) -> Self {
        Self::new(0.0, 0.0, bottom, 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// A value that differs between portrait and landscape
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ByOrientation<T> {
    pub portrait: T,
    pub landscape: T,
}

impl<T: Copy> ByOrientation<T> {
    pub const fn new(portrait: T, landscape: T) -> Self {
        Self {
            portrait,
            landscape,
        }
    }

    pub fn get(&self, orientation: Orientation) -> T {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }
}

/// Camera cutout drawn on the bezel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotchKind {
    #[default]
    None,
    Notch,
    DynamicIsland,
    PunchHole,
}

/// Bezel rendering metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameStyle {
    /// Bezel thickness in logical units
    pub bezel: f64,
    pub notch: NotchKind,
    /// Gesture bar at the bottom edge of the screen
    pub home_indicator: bool,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            bezel: 12.0,
            notch: NotchKind::None,
            home_indicator: false,
        }
    }
}

/// Immutable description of a simulated device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfiguration {
    /// Display name (e.g. "iPhone 14")
    pub name: String,

    /// Platform whose conventions the wrapped UI should emulate
    pub platform: TargetPlatform,

    /// Logical screen size in portrait orientation
    pub screen: Size,

    /// Standard diagonal size, used only for zoom normalization
    pub diagonal_inches: f64,

    #[serde(default)]
    pub frame: FrameStyle,

    /// Regions covered by system UI (status bar, notch, home indicator)
    #[serde(default)]
    pub safe_areas: ByOrientation<EdgeInsets>,

    /// Height of the on-screen keyboard
    #[serde(default)]
    pub keyboard_height: ByOrientation<f64>,
}

impl DeviceConfiguration {
    /// Logical screen size in the given orientation.
    pub fn screen_size(&self, orientation: Orientation) -> Size {
        match orientation {
            Orientation::Portrait => self.screen,
            Orientation::Landscape => self.screen.flipped(),
        }
    }

    pub fn aspect_ratio(&self, orientation: Orientation) -> f64 {
        self.screen_size(orientation).aspect_ratio()
    }

    pub fn safe_area(&self, orientation: Orientation) -> EdgeInsets {
        self.safe_areas.get(orientation)
    }

    /// Bottom inset produced by the on-screen keyboard.
    pub fn keyboard_inset(&self, orientation: Orientation) -> EdgeInsets {
        EdgeInsets::only_bottom(self.keyboard_height.get(orientation))
    }

    /// Reject configurations that would make fitting or zoom meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_device(&self.name, "name must not be empty"));
        }
        if !is_positive(self.screen.width) {
            return Err(Error::invalid_device(
                &self.name,
                "screen width must be positive",
            ));
        }
        if !is_positive(self.screen.height) {
            return Err(Error::invalid_device(
                &self.name,
                "screen height must be positive",
            ));
        }
        if !is_positive(self.diagonal_inches) {
            return Err(Error::invalid_device(
                &self.name,
                "diagonal size must be positive",
            ));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
